use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::icons::icon_plus;
use super::{
    alert, confirm, form_setter, input_field, message_row, mode_buttons, section_shell, use_api,
};
use crate::classify::{apply_filter, due_status, parcela_label, row_css, DueStatus};
use crate::controller::{self, ListView, Refreshed, SaidaForm};
use crate::error::Action;
use crate::format::{format_amount, format_date};
use crate::models::Saida;
use crate::view_state::{today, ListMode, SaidaFilter, ViewState};

const COLUMNS: usize = 6;

fn edit_fields(form: &UseStateHandle<SaidaForm>) -> Html {
    html! {
        <>
            { input_field("text", "Nome", &form.nome, true, form_setter(form, |f, v| f.nome = v)) }
            { input_field("number", "Valor (R$)", &form.valor, true, form_setter(form, |f, v| f.valor = v)) }
            { input_field("text", "Flags (ex: urg,feito)", &form.flags, false, form_setter(form, |f, v| f.flags = v)) }
            { input_field("date", "Vencimento", &form.data_vencimento, false, form_setter(form, |f, v| f.data_vencimento = v)) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct SaidaRowProps {
    saida: Saida,
    state: ViewState,
    on_refreshed: Callback<Refreshed<Saida>>,
}

#[function_component(SaidaRow)]
fn saida_row(props: &SaidaRowProps) -> Html {
    let api = use_api();
    let editing = use_state(|| false);
    let form = use_state(|| SaidaForm::from_saida(&props.saida));

    let on_show = {
        let editing = editing.clone();
        let form = form.clone();
        let saida = props.saida.clone();
        Callback::from(move |_| {
            form.set(SaidaForm::from_saida(&saida));
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
        let id = props.saida.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let editing = editing.clone();
            let form = (*form).clone();
            let on_refreshed = on_refreshed.clone();
            spawn_local(async move {
                match controller::update_saida(&*api.0, id, &form, &state, today()).await {
                    Ok(refreshed) => {
                        editing.set(false);
                        on_refreshed.emit(refreshed);
                    }
                    Err(err) => {
                        log::error!("Erro ao atualizar saída {}: {}", id, err);
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
        let saida = props.saida.clone();
        Callback::from(move |_| {
            let Some(scope) = controller::choose_delete_scope(&saida, confirm) else {
                return;
            };
            let api = api.clone();
            let on_refreshed = on_refreshed.clone();
            let id = saida.id;
            spawn_local(async move {
                match controller::delete_saida(&*api.0, id, scope, &state, today()).await {
                    Ok(refreshed) => on_refreshed.emit(refreshed),
                    Err(err) => {
                        log::error!("Erro ao deletar saída {} ({:?}): {}", id, scope, err);
                        alert(&err.alert_text(Action::Delete));
                    }
                }
            });
        })
    };

    let saida = &props.saida;
    let due_class = due_status(saida.due_date(), today()).map(DueStatus::css);
    html! {
        <>
            <tr class={classes!("text-sm", "hover:bg-muted/40", "transition-colors", row_css(saida))}>
                <td class="px-6 py-4 text-foreground" data-label="Nome">{ saida.nome.clone() }</td>
                <td class="px-6 py-4 font-semibold text-foreground" data-label="Valor (R$)">{ format_amount(saida.valor) }</td>
                <td class="px-6 py-4 text-muted-foreground" data-label="Flags">{ saida.flags_str().to_string() }</td>
                <td class={classes!("px-6", "py-4", due_class)} data-label="Vencimento">{ format_date(saida.data_vencimento.as_deref()) }</td>
                <td class="px-6 py-4" data-label="Parcelas">{ parcela_label(saida) }</td>
                <td class="px-6 py-4 space-x-2" data-label="Ações">
                    <button class="edit text-[11px] font-bold text-[#1D617A]" onclick={on_show}>{"Editar"}</button>
                    <button class="delete text-[11px] font-bold text-red-500" onclick={on_delete}>{"Remover"}</button>
                </td>
            </tr>
            <tr class="edit-form" hidden={!*editing}>
                <td colspan={COLUMNS.to_string()} class="px-6 py-4 bg-slate-50">
                    <form onsubmit={on_update} class="grid grid-cols-2 md:grid-cols-5 gap-3">
                        { edit_fields(&form) }
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

fn filter_select(current: SaidaFilter, on_filter: &Callback<SaidaFilter>) -> Html {
    let onchange = {
        let on_filter = on_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_filter.emit(SaidaFilter::parse(&select.value()));
        })
    };
    html! {
        <select id="filter-saidas" {onchange} class="bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-1 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
            { for SaidaFilter::ALL.iter().map(|filter| html! {
                <option value={filter.value()} selected={*filter == current}>{ filter.label() }</option>
            }) }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct SaidasSectionProps {
    pub rows: ListView<Saida>,
    pub state: ViewState,
    pub on_mode: Callback<ListMode>,
    pub on_filter: Callback<SaidaFilter>,
    pub on_refreshed: Callback<Refreshed<Saida>>,
}

#[function_component(SaidasSection)]
pub fn saidas_section(props: &SaidasSectionProps) -> Html {
    let api = use_api();
    let show_add = use_state(|| false);
    let saving = use_state(|| false);
    let form = use_state(SaidaForm::default);

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
                let result = controller::create_saida(&*api.0, &form, &state, today()).await;
                saving.set(false);
                match result {
                    Ok(refreshed) => {
                        on_refreshed.emit(refreshed);
                        form.set(SaidaForm::default());
                        show_add.set(false);
                    }
                    Err(err) => {
                        log::error!("Erro ao adicionar saída: {}", err);
                        alert(&err.alert_text(Action::Create));
                    }
                }
            });
        })
    };

    let body = match &props.rows {
        ListView::Loading => message_row(COLUMNS, "Carregando..."),
        ListView::Unavailable => message_row(COLUMNS, "Erro ao carregar saídas."),
        ListView::Loaded(rows) if rows.is_empty() => {
            message_row(COLUMNS, "Nenhuma saída encontrada neste período.")
        }
        ListView::Loaded(rows) => {
            let visible = apply_filter(rows, props.state.filter, today());
            if visible.is_empty() {
                message_row(COLUMNS, "Nenhuma saída encontrada com os filtros selecionados.")
            } else {
                html! {
                    { for visible.into_iter().map(|saida| html! {
                        <SaidaRow
                            key={saida.id}
                            saida={saida.clone()}
                            state={props.state}
                            on_refreshed={props.on_refreshed.clone()}
                        />
                    }) }
                }
            }
        }
    };

    let actions = html! {
        <div class="flex items-center gap-3">
            { filter_select(props.state.filter, &props.on_filter) }
            { mode_buttons(props.state.saidas_mode, &props.on_mode) }
            <button id="add-saida-btn" onclick={on_toggle_add} class="flex items-center gap-2 bg-[#173E63] text-white px-3 py-1 rounded-[10px] text-[11px] font-bold">
                { icon_plus() }
                <span>{"Nova saída"}</span>
            </button>
        </div>
    };

    section_shell(
        "Saídas",
        actions,
        html! {
            <>
                if *show_add {
                    <form id="form-saida" onsubmit={on_submit} class="grid grid-cols-2 md:grid-cols-6 gap-3">
                        { edit_fields(&form) }
                        { input_field("number", "Parcelas", &form.parcelamento, false, form_setter(&form, |f, v| f.parcelamento = v)) }
                        <div class="flex gap-2">
                            <button type="submit" disabled={*saving} class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold">{ if *saving { "Salvando..." } else { "Adicionar" } }</button>
                            <button type="button" onclick={on_cancel_add} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[10px] font-bold">{"Cancelar"}</button>
                        </div>
                    </form>
                }
                <div class="overflow-x-auto">
                    <table id="saidas" class="w-full text-left border-collapse">
                        <thead>
                            <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                <th class="px-6 py-4 font-bold">{"Nome"}</th>
                                <th class="px-6 py-4 font-bold">{"Valor (R$)"}</th>
                                <th class="px-6 py-4 font-bold">{"Flags"}</th>
                                <th class="px-6 py-4 font-bold">{"Vencimento"}</th>
                                <th class="px-6 py-4 font-bold">{"Parcelas"}</th>
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
