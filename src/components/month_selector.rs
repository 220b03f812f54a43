use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::view_state::{MonthOption, MonthSelection};

#[derive(Properties, PartialEq)]
pub struct MonthSelectorProps {
    pub options: Vec<MonthOption>,
    pub selected: MonthSelection,
    pub on_change: Callback<MonthSelection>,
}

#[function_component(MonthSelector)]
pub fn month_selector(props: &MonthSelectorProps) -> Html {
    let selected_value = props.selected.value();
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            match MonthSelection::parse(&value) {
                Some(selection) => on_change.emit(selection),
                None => log::warn!("Valor de mês inválido: {}", value),
            }
        })
    };

    html! {
        <select id="month-select" {onchange} class="bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[12px] font-bold text-[#173E63] focus:ring-2 focus:ring-[#1D617A] outline-none">
            { for props.options.iter().map(|option| html! {
                <option value={option.value.clone()} selected={option.value == selected_value}>{ option.label.clone() }</option>
            }) }
        </select>
    }
}
