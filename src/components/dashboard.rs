use yew::prelude::*;

use super::icons::{
    icon_clock, icon_credit_card, icon_layers, icon_trending_down, icon_trending_up, icon_wallet,
};
use crate::controller::DashboardView;
use crate::format::format_currency;
use crate::models::DashboardSummary;

pub const DASHBOARD_ERROR: &str = "Erro ao carregar o dashboard.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatIcon {
    Wallet,
    TrendingUp,
    TrendingDown,
    Clock,
    CreditCard,
    Layers,
}

#[derive(Clone, Debug, PartialEq)]
struct SummaryCard {
    title: &'static str,
    value: String,
    detail: Option<String>,
    icon: StatIcon,
}

fn summary_cards(summary: &DashboardSummary) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "Saldo Disponível",
            value: format_currency(summary.saldo),
            detail: None,
            icon: StatIcon::Wallet,
        },
        SummaryCard {
            title: "Entradas Totais",
            value: format_currency(summary.entradas_totais),
            detail: Some(format!("Recebidas: {}", format_currency(summary.entradas_recebidas))),
            icon: StatIcon::TrendingUp,
        },
        SummaryCard {
            title: "Saídas Totais",
            value: format_currency(summary.saidas_totais),
            detail: Some(format!("Pagas: {}", format_currency(summary.saidas_pagas))),
            icon: StatIcon::TrendingDown,
        },
        SummaryCard {
            title: "Pendentes",
            value: format_currency(summary.pendentes),
            detail: None,
            icon: StatIcon::Clock,
        },
        SummaryCard {
            title: "Compras Parceladas",
            value: format!("{} itens", summary.total_itens_parcelados),
            detail: None,
            icon: StatIcon::Layers,
        },
        SummaryCard {
            title: "Próximas Parcelas (30 dias)",
            value: format_currency(summary.proximas_parcelas),
            detail: None,
            icon: StatIcon::CreditCard,
        },
    ]
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    card: SummaryCard,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let card = &props.card;
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ card.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ card.value.clone() }</h3>
                {
                    if let Some(detail) = &card.detail {
                        html! { <p class="text-xs text-slate-500 mt-1">{ detail.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match card.icon {
                        StatIcon::Wallet => icon_wallet(),
                        StatIcon::TrendingUp => icon_trending_up(),
                        StatIcon::TrendingDown => icon_trending_down(),
                        StatIcon::Clock => icon_clock(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Layers => icon_layers(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub view: DashboardView,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let body = match &props.view {
        DashboardView::Loading => html! {
            <p class="text-muted-foreground">{"Carregando..."}</p>
        },
        DashboardView::Unavailable => html! {
            <p class="text-sm text-red-500">{ DASHBOARD_ERROR }</p>
        },
        DashboardView::Loaded(summary) => html! {
            <>
                <div class="mes-referencia text-[#173E63] font-bold">{ summary.mes_referencia.clone() }</div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    { for summary_cards(summary).into_iter().map(|card| html! { <StatCard card={card} /> }) }
                </div>
            </>
        },
    };

    html! {
        <div id="dashboard" class="space-y-4">
            { body }
        </div>
    }
}
