//! Finanças
//!
//! Monthly dashboard plus editable income (entradas) and expense (saídas)
//! lists for a personal finance API, rendered client-side with Yew.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod classify;
mod components;
mod config;
mod controller;
mod error;
mod format;
mod models;
mod view_state;

use api::HttpApi;
use components::{ApiHandle, Dashboard, EntradasSection, MonthSelector, SaidasSection};
use controller::{DashboardView, ListView, Refreshed};
use models::{Entrada, Saida};
use view_state::{month_options, today, ListMode, ListScope, MonthSelection, SaidaFilter, ViewState};

#[function_component(App)]
fn app() -> Html {
    let api = use_state(|| ApiHandle::new(HttpApi::default()));
    let view_state = use_state(ViewState::default);
    let dashboard = use_state(DashboardView::default);
    let entradas = use_state(ListView::<Entrada>::default);
    let saidas = use_state(ListView::<Saida>::default);
    let months = use_state(|| month_options(&[], today()));

    {
        let api = (*api).clone();
        let months = months.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    months.set(controller::load_month_options(&*api.0, today()).await);
                });
                || ()
            },
            (),
        );
    }

    {
        let api = (*api).clone();
        let dashboard = dashboard.clone();
        let state = *view_state;
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    dashboard.set(controller::load_dashboard(&*api.0, &state).await);
                });
                || ()
            },
            view_state.month,
        );
    }

    {
        let api = (*api).clone();
        let entradas = entradas.clone();
        use_effect_with_deps(
            move |scope: &ListScope| {
                let scope = *scope;
                spawn_local(async move {
                    entradas.set(controller::load_entradas(&*api.0, scope).await);
                });
                || ()
            },
            view_state.entradas_scope(today()),
        );
    }

    {
        let api = (*api).clone();
        let saidas = saidas.clone();
        use_effect_with_deps(
            move |scope: &ListScope| {
                let scope = *scope;
                spawn_local(async move {
                    saidas.set(controller::load_saidas(&*api.0, scope).await);
                });
                || ()
            },
            view_state.saidas_scope(today()),
        );
    }

    let on_month = {
        let view_state = view_state.clone();
        Callback::from(move |month: MonthSelection| {
            log::info!("Mês selecionado: {}", month.value());
            view_state.set(ViewState {
                month,
                ..*view_state
            });
        })
    };

    let on_entradas_mode = {
        let view_state = view_state.clone();
        Callback::from(move |entradas_mode: ListMode| {
            view_state.set(ViewState {
                entradas_mode,
                ..*view_state
            });
        })
    };

    let on_saidas_mode = {
        let view_state = view_state.clone();
        Callback::from(move |saidas_mode: ListMode| {
            view_state.set(ViewState {
                saidas_mode,
                ..*view_state
            });
        })
    };

    let on_filter = {
        let view_state = view_state.clone();
        Callback::from(move |filter: SaidaFilter| {
            view_state.set(ViewState {
                filter,
                ..*view_state
            });
        })
    };

    let on_entradas_refreshed = {
        let entradas = entradas.clone();
        let dashboard = dashboard.clone();
        Callback::from(move |refreshed: Refreshed<Entrada>| {
            entradas.set(refreshed.rows);
            dashboard.set(refreshed.dashboard);
        })
    };

    let on_saidas_refreshed = {
        let saidas = saidas.clone();
        let dashboard = dashboard.clone();
        Callback::from(move |refreshed: Refreshed<Saida>| {
            saidas.set(refreshed.rows);
            dashboard.set(refreshed.dashboard);
        })
    };

    html! {
        <ContextProvider<ApiHandle> context={(*api).clone()}>
            <div class="min-h-screen bg-background">
                <div class="p-6 max-w-7xl mx-auto space-y-6">
                    <div class="flex items-center justify-between pb-4 border-b border-border">
                        <h1 class="text-2xl font-bold text-foreground">{"Finanças"}</h1>
                        <MonthSelector options={(*months).clone()} selected={view_state.month} on_change={on_month} />
                    </div>
                    <Dashboard view={(*dashboard).clone()} />
                    <EntradasSection
                        rows={(*entradas).clone()}
                        state={*view_state}
                        on_mode={on_entradas_mode}
                        on_refreshed={on_entradas_refreshed}
                    />
                    <SaidasSection
                        rows={(*saidas).clone()}
                        state={*view_state}
                        on_mode={on_saidas_mode}
                        on_filter={on_filter}
                        on_refreshed={on_saidas_refreshed}
                    />
                </div>
            </div>
        </ContextProvider<ApiHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Finanças starting, API at {}", config::api_base_url());

    yew::Renderer::<App>::new().render();
}
