//! Fetch and mutation sequences behind the views.
//!
//! Every mutation runs as: request, then a re-fetch of the affected list,
//! then a re-fetch of the dashboard. Nothing is refreshed when the mutation
//! fails, so the caller keeps whatever it already rendered.

use chrono::NaiveDate;

use crate::api::FinancasApi;
use crate::error::{ActionError, FormError};
use crate::models::{
    DashboardSummary, Entrada, EntradaPayload, NovaSaida, Saida, SaidaUpdate, StatusEntrada,
};
use crate::view_state::{month_options, ListScope, MonthOption, ViewState};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardView {
    #[default]
    Loading,
    Unavailable,
    Loaded(DashboardSummary),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Loading,
    Unavailable,
    Loaded(Vec<T>),
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        ListView::Loading
    }
}

impl<T> From<Option<Vec<T>>> for ListView<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        value.map_or(ListView::Unavailable, ListView::Loaded)
    }
}

/// Views re-fetched after a successful mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Refreshed<T> {
    pub rows: ListView<T>,
    pub dashboard: DashboardView,
}

/// How much of an installment group to delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteScope {
    Single,
    Group(i64),
}

pub const CONFIRM_DELETE_SAIDA: &str = "Tem certeza que deseja remover esta saída?";
pub const CONFIRM_DELETE_GROUP: &str =
    "Esta saída é uma parcela. Deseja excluir todas as parcelas restantes?";
pub const CONFIRM_DELETE_PARCELA: &str = "Excluir apenas esta parcela?";

/// Walks the delete prompts for `saida`; `None` aborts. `ask` is only
/// called for the prompts that are actually reached.
pub fn choose_delete_scope<F>(saida: &Saida, mut ask: F) -> Option<DeleteScope>
where
    F: FnMut(&str) -> bool,
{
    match saida.group_id() {
        Some(group_id) if ask(CONFIRM_DELETE_GROUP) => Some(DeleteScope::Group(group_id)),
        Some(_) => ask(CONFIRM_DELETE_PARCELA).then_some(DeleteScope::Single),
        None => ask(CONFIRM_DELETE_SAIDA).then_some(DeleteScope::Single),
    }
}

fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::InvalidAmount(raw.trim().to_string())),
    }
}

fn required_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(FormError::MissingName)
    } else {
        Ok(name.to_string())
    }
}

fn optional_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntradaForm {
    pub nome: String,
    pub valor: String,
    pub status: StatusEntrada,
    pub data: String,
}

impl EntradaForm {
    pub fn from_entrada(entrada: &Entrada) -> Self {
        Self {
            nome: entrada.nome.clone(),
            valor: entrada.valor.to_string(),
            status: entrada.status,
            data: entrada.data.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<EntradaPayload, FormError> {
        Ok(EntradaPayload {
            nome: required_name(&self.nome)?,
            valor: parse_amount(&self.valor)?,
            status: self.status,
            data: optional_date(&self.data),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaidaForm {
    pub nome: String,
    pub valor: String,
    pub flags: String,
    pub data_vencimento: String,
    pub parcelamento: String,
}

impl Default for SaidaForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            valor: String::new(),
            flags: String::new(),
            data_vencimento: String::new(),
            parcelamento: "1".to_string(),
        }
    }
}

impl SaidaForm {
    pub fn from_saida(saida: &Saida) -> Self {
        Self {
            nome: saida.nome.clone(),
            valor: saida.valor.to_string(),
            flags: saida.flags.clone().unwrap_or_default(),
            data_vencimento: saida.data_vencimento.clone().unwrap_or_default(),
            parcelamento: saida.total_parcelas.unwrap_or(1).to_string(),
        }
    }

    fn installments(&self) -> Result<u32, FormError> {
        let raw = self.parcelamento.trim();
        if raw.is_empty() {
            return Ok(1);
        }
        match raw.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(FormError::InvalidInstallments(raw.to_string())),
        }
    }

    pub fn to_new(&self) -> Result<NovaSaida, FormError> {
        Ok(NovaSaida {
            nome: required_name(&self.nome)?,
            valor: parse_amount(&self.valor)?,
            flags: self.flags.trim().to_string(),
            data_vencimento: optional_date(&self.data_vencimento),
            parcelamento: self.installments()?,
        })
    }

    pub fn to_update(&self) -> Result<SaidaUpdate, FormError> {
        Ok(SaidaUpdate {
            nome: required_name(&self.nome)?,
            valor: parse_amount(&self.valor)?,
            flags: self.flags.trim().to_string(),
            data_vencimento: optional_date(&self.data_vencimento),
        })
    }
}

pub async fn load_dashboard<A>(api: &A, state: &ViewState) -> DashboardView
where
    A: FinancasApi + ?Sized,
{
    match api.dashboard(state.month.dashboard_query()).await {
        Some(summary) => DashboardView::Loaded(summary),
        None => DashboardView::Unavailable,
    }
}

pub async fn load_entradas<A>(api: &A, scope: ListScope) -> ListView<Entrada>
where
    A: FinancasApi + ?Sized,
{
    api.list_entradas(scope).await.into()
}

pub async fn load_saidas<A>(api: &A, scope: ListScope) -> ListView<Saida>
where
    A: FinancasApi + ?Sized,
{
    api.list_saidas(scope).await.into()
}

/// Selector options; an unavailable listing still yields the current month.
pub async fn load_month_options<A>(api: &A, today: NaiveDate) -> Vec<MonthOption>
where
    A: FinancasApi + ?Sized,
{
    let available = api.available_months().await.unwrap_or_default();
    month_options(&available, today)
}

async fn refresh_entradas<A>(api: &A, state: &ViewState, today: NaiveDate) -> Refreshed<Entrada>
where
    A: FinancasApi + ?Sized,
{
    let rows = load_entradas(api, state.entradas_scope(today)).await;
    let dashboard = load_dashboard(api, state).await;
    Refreshed { rows, dashboard }
}

async fn refresh_saidas<A>(api: &A, state: &ViewState, today: NaiveDate) -> Refreshed<Saida>
where
    A: FinancasApi + ?Sized,
{
    let rows = load_saidas(api, state.saidas_scope(today)).await;
    let dashboard = load_dashboard(api, state).await;
    Refreshed { rows, dashboard }
}

pub async fn create_entrada<A>(
    api: &A,
    form: &EntradaForm,
    state: &ViewState,
    today: NaiveDate,
) -> Result<Refreshed<Entrada>, ActionError>
where
    A: FinancasApi + ?Sized,
{
    let payload = form.to_payload()?;
    api.create_entrada(&payload).await?;
    Ok(refresh_entradas(api, state, today).await)
}

pub async fn update_entrada<A>(
    api: &A,
    id: i64,
    form: &EntradaForm,
    state: &ViewState,
    today: NaiveDate,
) -> Result<Refreshed<Entrada>, ActionError>
where
    A: FinancasApi + ?Sized,
{
    let payload = form.to_payload()?;
    api.update_entrada(id, &payload).await?;
    Ok(refresh_entradas(api, state, today).await)
}

pub async fn delete_entrada<A>(
    api: &A,
    id: i64,
    state: &ViewState,
    today: NaiveDate,
) -> Result<Refreshed<Entrada>, ActionError>
where
    A: FinancasApi + ?Sized,
{
    api.delete_entrada(id).await?;
    Ok(refresh_entradas(api, state, today).await)
}

pub async fn create_saida<A>(
    api: &A,
    form: &SaidaForm,
    state: &ViewState,
    today: NaiveDate,
) -> Result<Refreshed<Saida>, ActionError>
where
    A: FinancasApi + ?Sized,
{
    let payload = form.to_new()?;
    api.create_saida(&payload).await?;
    Ok(refresh_saidas(api, state, today).await)
}

pub async fn update_saida<A>(
    api: &A,
    id: i64,
    form: &SaidaForm,
    state: &ViewState,
    today: NaiveDate,
) -> Result<Refreshed<Saida>, ActionError>
where
    A: FinancasApi + ?Sized,
{
    let payload = form.to_update()?;
    api.update_saida(id, &payload).await?;
    Ok(refresh_saidas(api, state, today).await)
}

pub async fn delete_saida<A>(
    api: &A,
    id: i64,
    scope: DeleteScope,
    state: &ViewState,
    today: NaiveDate,
) -> Result<Refreshed<Saida>, ActionError>
where
    A: FinancasApi + ?Sized,
{
    match scope {
        DeleteScope::Single => api.delete_saida(id).await?,
        DeleteScope::Group(group_id) => api.delete_saida_group(group_id).await?,
    }
    Ok(refresh_saidas(api, state, today).await)
}
