//! Row classification and client-side filtering for the expense table.

use chrono::{Duration, NaiveDate};

use crate::models::Saida;
use crate::view_state::SaidaFilter;

pub const FLAG_URGENT: &str = "urg";
pub const FLAG_DONE: &str = "feito";

/// Days ahead (inclusive) for a due date to count as near.
pub const NEAR_DUE_DAYS: i64 = 7;
/// Window used by the "vencendo em 30 dias" filter.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowClass {
    Urgent,
    Done,
    Parcela,
}

impl RowClass {
    pub fn css(self) -> &'static str {
        match self {
            RowClass::Urgent => "urgent",
            RowClass::Done => "done",
            RowClass::Parcela => "parcela",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    Near,
    Overdue,
}

impl DueStatus {
    pub fn css(self) -> &'static str {
        match self {
            DueStatus::Near => "vencimento-proxima",
            DueStatus::Overdue => "vencimento-atrasado",
        }
    }
}

/// Substring match, so `urgente` carries `urg` and `feito_parcial` carries `feito`.
pub fn has_flag(flags: &str, flag: &str) -> bool {
    flags.contains(flag)
}

pub fn row_classes(saida: &Saida) -> Vec<RowClass> {
    let flags = saida.flags_str();
    let mut classes = Vec::new();
    if has_flag(flags, FLAG_URGENT) {
        classes.push(RowClass::Urgent);
    }
    if has_flag(flags, FLAG_DONE) {
        classes.push(RowClass::Done);
    }
    if saida.is_parcelada() {
        classes.push(RowClass::Parcela);
    }
    classes
}

pub fn row_css(saida: &Saida) -> Vec<&'static str> {
    row_classes(saida).into_iter().map(RowClass::css).collect()
}

/// Due today counts as near; only days strictly before today are overdue.
pub fn due_status(due: Option<NaiveDate>, today: NaiveDate) -> Option<DueStatus> {
    let days = (due? - today).num_days();
    if days < 0 {
        Some(DueStatus::Overdue)
    } else if days <= NEAR_DUE_DAYS {
        Some(DueStatus::Near)
    } else {
        None
    }
}

pub fn matches_filter(saida: &Saida, filter: SaidaFilter, today: NaiveDate) -> bool {
    match filter {
        SaidaFilter::Nenhum => true,
        SaidaFilter::Parcelas => saida.is_parcelada(),
        SaidaFilter::NaoParcelas => !saida.is_parcelada(),
        SaidaFilter::Proximas => {
            let limit = today + Duration::days(UPCOMING_WINDOW_DAYS);
            saida
                .due_date()
                .map_or(false, |due| due >= today && due <= limit)
        }
    }
}

pub fn apply_filter(saidas: &[Saida], filter: SaidaFilter, today: NaiveDate) -> Vec<&Saida> {
    saidas
        .iter()
        .filter(|s| matches_filter(s, filter, today))
        .collect()
}

/// `atual/total` for split purchases, empty otherwise.
pub fn parcela_label(saida: &Saida) -> String {
    match (saida.parcela_atual, saida.total_parcelas) {
        (Some(atual), Some(total)) if total > 1 => format!("{}/{}", atual, total),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn saida(id: i64, flags: &str, due: Option<&str>, total: Option<u32>) -> Saida {
        Saida {
            id,
            nome: format!("saida {}", id),
            valor: 100.0,
            flags: Some(flags.to_string()),
            data_vencimento: due.map(str::to_string),
            parcela_atual: total.map(|_| 1),
            total_parcelas: total,
            id_grupo_parcela: total.filter(|t| *t > 1).map(|_| 77),
        }
    }

    #[test]
    fn urgent_and_done_flags_both_mark_the_row() {
        let s = saida(1, "urg,feito", None, None);
        assert_eq!(row_classes(&s), vec![RowClass::Urgent, RowClass::Done]);
        assert_eq!(row_css(&s), vec!["urgent", "done"]);
    }

    #[test]
    fn flags_match_anywhere_in_the_text() {
        assert!(has_flag("no_rec, feito", "feito"));
        assert!(has_flag("urgente", "urg"));
        assert!(!has_flag("no_rec", "urg"));
        assert!(!has_flag("", "urg"));

        let s = saida(4, "urgente,feito_parcial", None, None);
        assert_eq!(row_css(&s), vec!["urgent", "done"]);
    }

    #[test]
    fn installment_row_gets_parcela_class() {
        let s = saida(2, "", None, Some(6));
        assert_eq!(row_classes(&s), vec![RowClass::Parcela]);
        assert_eq!(parcela_label(&s), "1/6");
        assert_eq!(parcela_label(&saida(3, "", None, Some(1))), "");
    }

    #[test]
    fn due_today_is_near_and_yesterday_is_overdue() {
        let today = date(2024, 6, 20);
        assert_eq!(due_status(Some(today), today), Some(DueStatus::Near));
        assert_eq!(
            due_status(Some(date(2024, 6, 19)), today),
            Some(DueStatus::Overdue)
        );
        assert_eq!(
            due_status(Some(date(2024, 6, 27)), today),
            Some(DueStatus::Near)
        );
        assert_eq!(due_status(Some(date(2024, 6, 28)), today), None);
        assert_eq!(due_status(None, today), None);
    }

    #[test]
    fn filters_split_rows_by_installments_and_due_window() {
        let today = date(2024, 6, 20);
        let rows = vec![
            saida(1, "", Some("2024-06-20"), Some(3)),
            saida(2, "", Some("2024-07-20"), None),
            saida(3, "", Some("2024-07-21"), Some(1)),
            saida(4, "", Some("2024-06-19"), None),
            saida(5, "", None, None),
        ];
        let ids = |filter| -> Vec<i64> {
            apply_filter(&rows, filter, today)
                .iter()
                .map(|s| s.id)
                .collect()
        };

        assert_eq!(ids(SaidaFilter::Nenhum), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(SaidaFilter::Parcelas), vec![1]);
        assert_eq!(ids(SaidaFilter::NaoParcelas), vec![2, 3, 4, 5]);
        assert_eq!(ids(SaidaFilter::Proximas), vec![1, 2]);
    }
}
