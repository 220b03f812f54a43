//! Client-owned view state: which month is selected, how each list is
//! scoped and which expense filter is active.

use chrono::{Datelike, Local, NaiveDate};

use crate::format::month_name;
use crate::models::MesDisponivel;

pub const CURRENT_MONTH_VALUE: &str = "current";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// `ano`/`mes` query parameters understood by the API.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ano", self.year.to_string()),
            ("mes", self.month.to_string()),
        ]
    }

    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthSelection {
    #[default]
    Current,
    Specific(YearMonth),
}

impl MonthSelection {
    /// Parses a month selector value: `current` or `YYYY-M`.
    pub fn parse(value: &str) -> Option<Self> {
        if value == CURRENT_MONTH_VALUE {
            return Some(MonthSelection::Current);
        }
        let (year, month) = value.split_once('-')?;
        let year = year.trim().parse().ok()?;
        let month = month.trim().parse().ok()?;
        YearMonth::new(year, month).map(MonthSelection::Specific)
    }

    pub fn value(&self) -> String {
        match self {
            MonthSelection::Current => CURRENT_MONTH_VALUE.to_string(),
            MonthSelection::Specific(ym) => format!("{}-{}", ym.year, ym.month),
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> YearMonth {
        match self {
            MonthSelection::Current => YearMonth::of(today),
            MonthSelection::Specific(ym) => *ym,
        }
    }

    /// Month sent to the dashboard endpoint; the current month is left to the server.
    pub fn dashboard_query(&self) -> Option<YearMonth> {
        match self {
            MonthSelection::Current => None,
            MonthSelection::Specific(ym) => Some(*ym),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListMode {
    #[default]
    Month,
    All,
}

/// What a list request covers once the mode has been applied to the selected month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListScope {
    Month(YearMonth),
    All,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaidaFilter {
    #[default]
    Nenhum,
    Parcelas,
    NaoParcelas,
    Proximas,
}

impl SaidaFilter {
    pub const ALL: [SaidaFilter; 4] = [
        SaidaFilter::Nenhum,
        SaidaFilter::Parcelas,
        SaidaFilter::NaoParcelas,
        SaidaFilter::Proximas,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SaidaFilter::Nenhum => "todas",
            SaidaFilter::Parcelas => "parcelas",
            SaidaFilter::NaoParcelas => "nao-parcelas",
            SaidaFilter::Proximas => "proximas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SaidaFilter::Nenhum => "Todas as saídas",
            SaidaFilter::Parcelas => "Apenas parceladas",
            SaidaFilter::NaoParcelas => "Sem parcelamento",
            SaidaFilter::Proximas => "Vencendo em 30 dias",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub month: MonthSelection,
    pub entradas_mode: ListMode,
    pub saidas_mode: ListMode,
    pub filter: SaidaFilter,
}

impl ViewState {
    pub fn entradas_scope(&self, today: NaiveDate) -> ListScope {
        self.scope(self.entradas_mode, today)
    }

    pub fn saidas_scope(&self, today: NaiveDate) -> ListScope {
        self.scope(self.saidas_mode, today)
    }

    fn scope(&self, mode: ListMode, today: NaiveDate) -> ListScope {
        match mode {
            ListMode::All => ListScope::All,
            ListMode::Month => ListScope::Month(self.month.resolve(today)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthOption {
    pub value: String,
    pub label: String,
}

/// Options for the month selector: the current month first, then every
/// other month the server has data for.
pub fn month_options(available: &[MesDisponivel], today: NaiveDate) -> Vec<MonthOption> {
    let current = YearMonth::of(today);
    let mut options = vec![MonthOption {
        value: CURRENT_MONTH_VALUE.to_string(),
        label: format!("{} (Atual)", current.label()),
    }];
    options.extend(
        available
            .iter()
            .filter_map(|m| YearMonth::new(m.ano, m.mes))
            .filter(|ym| *ym != current)
            .map(|ym| MonthOption {
                value: MonthSelection::Specific(ym).value(),
                label: ym.label(),
            }),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_selector_values() {
        assert_eq!(MonthSelection::parse("current"), Some(MonthSelection::Current));
        assert_eq!(
            MonthSelection::parse("2024-3"),
            Some(MonthSelection::Specific(YearMonth { year: 2024, month: 3 }))
        );
        assert_eq!(MonthSelection::parse("2024-13"), None);
        assert_eq!(MonthSelection::parse("garbage"), None);
    }

    #[test]
    fn current_month_omits_dashboard_query() {
        assert_eq!(MonthSelection::Current.dashboard_query(), None);
        let ym = YearMonth { year: 2023, month: 11 };
        assert_eq!(MonthSelection::Specific(ym).dashboard_query(), Some(ym));
        assert_eq!(
            ym.query(),
            vec![("ano", "2023".to_string()), ("mes", "11".to_string())]
        );
    }

    #[test]
    fn all_mode_drops_month_and_month_mode_restores_it() {
        let today = date(2024, 6, 20);
        let selected = YearMonth { year: 2024, month: 2 };
        let mut state = ViewState {
            month: MonthSelection::Specific(selected),
            ..ViewState::default()
        };

        state.saidas_mode = ListMode::All;
        assert_eq!(state.saidas_scope(today), ListScope::All);
        assert_eq!(state.entradas_scope(today), ListScope::Month(selected));

        state.saidas_mode = ListMode::Month;
        assert_eq!(state.saidas_scope(today), ListScope::Month(selected));
    }

    #[test]
    fn current_selection_resolves_to_today() {
        let state = ViewState::default();
        assert_eq!(
            state.entradas_scope(date(2025, 1, 31)),
            ListScope::Month(YearMonth { year: 2025, month: 1 })
        );
    }

    #[test]
    fn month_options_skip_current_month() {
        let today = date(2024, 6, 20);
        let available = [
            MesDisponivel { ano: 2024, mes: 6 },
            MesDisponivel { ano: 2024, mes: 5 },
            MesDisponivel { ano: 2023, mes: 12 },
        ];
        let options = month_options(&available, today);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["current", "2024-5", "2023-12"]);
        assert_eq!(options[0].label, "Junho 2024 (Atual)");
        assert_eq!(options[2].label, "Dezembro 2023");
    }

    #[test]
    fn unknown_filter_value_means_no_filter() {
        assert_eq!(SaidaFilter::parse("proximas"), SaidaFilter::Proximas);
        assert_eq!(SaidaFilter::parse(""), SaidaFilter::Nenhum);
    }
}
