use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusEntrada {
    #[default]
    Pendente,
    Recebido,
}

impl StatusEntrada {
    pub const ALL: [StatusEntrada; 2] = [StatusEntrada::Pendente, StatusEntrada::Recebido];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusEntrada::Pendente => "pendente",
            StatusEntrada::Recebido => "recebido",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusEntrada::Pendente => "Pendente",
            StatusEntrada::Recebido => "Recebido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Income record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Entrada {
    pub id: i64,
    pub nome: String,
    pub valor: f64,
    #[serde(default)]
    pub status: StatusEntrada,
    #[serde(default)]
    pub data: Option<String>,
}

/// Expense record. Installment fields are only present on split purchases.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Saida {
    pub id: i64,
    pub nome: String,
    pub valor: f64,
    #[serde(default)]
    pub flags: Option<String>,
    #[serde(default)]
    pub data_vencimento: Option<String>,
    #[serde(default)]
    pub parcela_atual: Option<u32>,
    #[serde(default)]
    pub total_parcelas: Option<u32>,
    #[serde(default)]
    pub id_grupo_parcela: Option<i64>,
}

impl Saida {
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.data_vencimento.as_deref().and_then(parse_iso_date)
    }

    pub fn flags_str(&self) -> &str {
        self.flags.as_deref().unwrap_or("")
    }

    pub fn is_parcelada(&self) -> bool {
        self.total_parcelas.map_or(false, |total| total > 1)
    }

    /// Installment group, if this expense belongs to one.
    pub fn group_id(&self) -> Option<i64> {
        self.id_grupo_parcela.filter(|id| *id != 0)
    }
}

/// Monthly aggregate computed by the server.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub mes_referencia: String,
    pub saldo: f64,
    pub entradas_totais: f64,
    pub entradas_recebidas: f64,
    pub saidas_totais: f64,
    pub saidas_pagas: f64,
    pub pendentes: f64,
    pub total_itens_parcelados: u32,
    pub proximas_parcelas: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MesDisponivel {
    pub ano: i32,
    pub mes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntradaPayload {
    pub nome: String,
    pub valor: f64,
    pub status: StatusEntrada,
    pub data: Option<String>,
}

/// Body of `POST /saidas`; `parcelamento` splits the purchase into that many installments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NovaSaida {
    pub nome: String,
    pub valor: f64,
    pub flags: String,
    pub data_vencimento: Option<String>,
    pub parcelamento: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaidaUpdate {
    pub nome: String,
    pub valor: f64,
    pub flags: String,
    pub data_vencimento: Option<String>,
}

/// Parses the date part of an ISO string (`2024-03-15` or `2024-03-15T10:00:00`).
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saida_without_installment_fields_deserializes() {
        let saida: Saida =
            serde_json::from_str(r#"{"id": 3, "nome": "luz", "valor": 800.0, "flags": ""}"#)
                .unwrap();
        assert!(!saida.is_parcelada());
        assert_eq!(saida.group_id(), None);
        assert_eq!(saida.due_date(), None);
    }

    #[test]
    fn installment_saida_exposes_group() {
        let saida: Saida = serde_json::from_str(
            r#"{"id": 9, "nome": "tv", "valor": 250.5, "flags": "urg",
                "data_vencimento": "2024-05-10", "parcela_atual": 2,
                "total_parcelas": 10, "id_grupo_parcela": 4}"#,
        )
        .unwrap();
        assert!(saida.is_parcelada());
        assert_eq!(saida.group_id(), Some(4));
        assert_eq!(saida.due_date(), NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn entrada_status_defaults_to_pendente() {
        let entrada: Entrada =
            serde_json::from_str(r#"{"id": 1, "nome": "hercruz", "valor": 5000}"#).unwrap();
        assert_eq!(entrada.status, StatusEntrada::Pendente);
        assert_eq!(entrada.data, None);
    }

    #[test]
    fn dashboard_tolerates_missing_fields() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"saldo": 6078, "pendentes": 1200.5}"#).unwrap();
        assert_eq!(summary.saldo, 6078.0);
        assert_eq!(summary.total_itens_parcelados, 0);
        assert!(summary.mes_referencia.is_empty());
    }

    #[test]
    fn payload_serializes_missing_date_as_null() {
        let payload = EntradaPayload {
            nome: "vasco".to_string(),
            valor: 9000.0,
            status: StatusEntrada::Recebido,
            data: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "recebido");
        assert!(json["data"].is_null());
    }

    #[test]
    fn iso_datetime_keeps_date_part() {
        assert_eq!(
            parse_iso_date("2024-03-15T10:00:00"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_iso_date("15/03/2024"), None);
    }
}
