use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::icons::icon_plus;
use super::{
    alert, confirm, form_setter, input_field, message_row, mode_buttons, section_shell, use_api,
};
use crate::controller::{self, EntradaForm, ListView, Refreshed};
use crate::error::Action;
use crate::format::{format_amount, format_date};
use crate::models::{Entrada, StatusEntrada};
use crate::view_state::{today, ListMode, ViewState};

const COLUMNS: usize = 5;

fn status_select(current: StatusEntrada, form: &UseStateHandle<EntradaForm>) -> Html {
    let onchange = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = StatusEntrada::parse(&select.value()) {
                let mut next = (*form).clone();
                next.status = status;
                form.set(next);
            }
        })
    };
    html! {
        <select {onchange} class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
            { for StatusEntrada::ALL.iter().map(|status| html! {
                <option value={status.as_str()} selected={*status == current}>{ status.label() }</option>
            }) }
        </select>
    }
}

fn entrada_fields(form: &UseStateHandle<EntradaForm>) -> Html {
    html! {
        <>
            { input_field("text", "Nome", &form.nome, true, form_setter(form, |f, v| f.nome = v)) }
            { input_field("number", "Valor (R$)", &form.valor, true, form_setter(form, |f, v| f.valor = v)) }
            { status_select(form.status, form) }
            { input_field("date", "Data", &form.data, false, form_setter(form, |f, v| f.data = v)) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct EntradaRowProps {
    entrada: Entrada,
    state: ViewState,
    on_refreshed: Callback<Refreshed<Entrada>>,
}

#[function_component(EntradaRow)]
fn entrada_row(props: &EntradaRowProps) -> Html {
    let api = use_api();
    let editing = use_state(|| false);
    let form = use_state(|| EntradaForm::from_entrada(&props.entrada));

    let on_show = {
        let editing = editing.clone();
        let form = form.clone();
        let entrada = props.entrada.clone();
        Callback::from(move |_| {
            form.set(EntradaForm::from_entrada(&entrada));
            editing.set(true);
        })
    };

    let on_hide = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_update = {
        let api = api.clone();
        let editing = editing.clone();
        let form = form.clone();
        let on_refreshed = props.on_refreshed.clone();
        let state = props.state;
        let id = props.entrada.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let editing = editing.clone();
            let form = (*form).clone();
            let on_refreshed = on_refreshed.clone();
            spawn_local(async move {
                match controller::update_entrada(&*api.0, id, &form, &state, today()).await {
                    Ok(refreshed) => {
                        editing.set(false);
                        on_refreshed.emit(refreshed);
                    }
                    Err(err) => {
                        log::error!("Erro ao atualizar entrada {}: {}", id, err);
                        alert(&err.alert_text(Action::Update));
                    }
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let on_refreshed = props.on_refreshed.clone();
        let state = props.state;
        let id = props.entrada.id;
        Callback::from(move |_| {
            if !confirm("Tem certeza que deseja remover esta entrada?") {
                return;
            }
            let api = api.clone();
            let on_refreshed = on_refreshed.clone();
            spawn_local(async move {
                match controller::delete_entrada(&*api.0, id, &state, today()).await {
                    Ok(refreshed) => on_refreshed.emit(refreshed),
                    Err(err) => {
                        log::error!("Erro ao deletar entrada {}: {}", id, err);
                        alert(&err.alert_text(Action::Delete));
                    }
                }
            });
        })
    };

    let entrada = &props.entrada;
    html! {
        <>
            <tr class="text-sm hover:bg-muted/40 transition-colors">
                <td class="px-6 py-4 text-foreground" data-label="Nome">{ entrada.nome.clone() }</td>
                <td class="px-6 py-4 font-semibold text-foreground" data-label="Valor (R$)">{ format_amount(entrada.valor) }</td>
                <td class="px-6 py-4" data-label="Status">
                    <span class="bg-secondary text-secondary-foreground px-2.5 py-1 rounded-md text-[9px] font-bold">{ entrada.status.label() }</span>
                </td>
                <td class="px-6 py-4 text-muted-foreground" data-label="Data">{ format_date(entrada.data.as_deref()) }</td>
                <td class="px-6 py-4 space-x-2" data-label="Ações">
                    <button class="edit text-[11px] font-bold text-[#1D617A]" onclick={on_show}>{"Editar"}</button>
                    <button class="delete text-[11px] font-bold text-red-500" onclick={on_delete}>{"Remover"}</button>
                </td>
            </tr>
            <tr class="edit-form" hidden={!*editing}>
                <td colspan={COLUMNS.to_string()} class="px-6 py-4 bg-slate-50">
                    <form onsubmit={on_update} class="grid grid-cols-2 md:grid-cols-5 gap-3">
                        { entrada_fields(&form) }
                        <div class="form-buttons flex gap-2">
                            <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold">{"Salvar"}</button>
                            <button type="button" onclick={on_hide} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[10px] font-bold">{"Cancelar"}</button>
                        </div>
                    </form>
                </td>
            </tr>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct EntradasSectionProps {
    pub rows: ListView<Entrada>,
    pub state: ViewState,
    pub on_mode: Callback<ListMode>,
    pub on_refreshed: Callback<Refreshed<Entrada>>,
}

#[function_component(EntradasSection)]
pub fn entradas_section(props: &EntradasSectionProps) -> Html {
    let api = use_api();
    let show_add = use_state(|| false);
    let saving = use_state(|| false);
    let form = use_state(EntradaForm::default);

    let on_toggle_add = {
        let show_add = show_add.clone();
        Callback::from(move |_| show_add.set(!*show_add))
    };

    let on_cancel_add = {
        let show_add = show_add.clone();
        Callback::from(move |_| show_add.set(false))
    };

    let on_submit = {
        let api = api.clone();
        let show_add = show_add.clone();
        let saving = saving.clone();
        let form = form.clone();
        let on_refreshed = props.on_refreshed.clone();
        let state = props.state;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let show_add = show_add.clone();
            let saving = saving.clone();
            let form = form.clone();
            let on_refreshed = on_refreshed.clone();
            saving.set(true);
            spawn_local(async move {
                let result = controller::create_entrada(&*api.0, &form, &state, today()).await;
                saving.set(false);
                match result {
                    Ok(refreshed) => {
                        on_refreshed.emit(refreshed);
                        form.set(EntradaForm::default());
                        show_add.set(false);
                    }
                    Err(err) => {
                        log::error!("Erro ao adicionar entrada: {}", err);
                        alert(&err.alert_text(Action::Create));
                    }
                }
            });
        })
    };

    let body = match &props.rows {
        ListView::Loading => message_row(COLUMNS, "Carregando..."),
        ListView::Unavailable => message_row(COLUMNS, "Erro ao carregar entradas."),
        ListView::Loaded(rows) if rows.is_empty() => {
            message_row(COLUMNS, "Nenhuma entrada encontrada neste período.")
        }
        ListView::Loaded(rows) => html! {
            { for rows.iter().map(|entrada| html! {
                <EntradaRow
                    key={entrada.id}
                    entrada={entrada.clone()}
                    state={props.state}
                    on_refreshed={props.on_refreshed.clone()}
                />
            }) }
        },
    };

    let actions = html! {
        <div class="flex items-center gap-3">
            { mode_buttons(props.state.entradas_mode, &props.on_mode) }
            <button id="add-entrada-btn" onclick={on_toggle_add} class="flex items-center gap-2 bg-[#173E63] text-white px-3 py-1 rounded-[10px] text-[11px] font-bold">
                { icon_plus() }
                <span>{"Nova entrada"}</span>
            </button>
        </div>
    };

    section_shell(
        "Entradas",
        actions,
        html! {
            <>
                if *show_add {
                    <form id="form-entrada" onsubmit={on_submit} class="grid grid-cols-2 md:grid-cols-5 gap-3">
                        { entrada_fields(&form) }
                        <div class="flex gap-2">
                            <button type="submit" disabled={*saving} class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold">{ if *saving { "Salvando..." } else { "Adicionar" } }</button>
                            <button type="button" onclick={on_cancel_add} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[10px] font-bold">{"Cancelar"}</button>
                        </div>
                    </form>
                }
                <div class="overflow-x-auto">
                    <table id="entradas" class="w-full text-left border-collapse">
                        <thead>
                            <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                <th class="px-6 py-4 font-bold">{"Nome"}</th>
                                <th class="px-6 py-4 font-bold">{"Valor (R$)"}</th>
                                <th class="px-6 py-4 font-bold">{"Status"}</th>
                                <th class="px-6 py-4 font-bold">{"Data"}</th>
                                <th class="px-6 py-4 font-bold">{"Ações"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            { body }
                        </tbody>
                    </table>
                </div>
            </>
        },
    )
}
