mod dashboard;
mod entradas;
mod icons;
mod month_selector;
mod saidas;

pub use dashboard::Dashboard;
pub use entradas::EntradasSection;
pub use month_selector::MonthSelector;
pub use saidas::SaidasSection;

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{FinancasApi, HttpApi};
use crate::view_state::ListMode;

/// API client shared through context.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<dyn FinancasApi>);

impl ApiHandle {
    pub fn new(api: impl FinancasApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>().unwrap_or_else(|| {
        log::warn!("ApiHandle missing from context, using default HttpApi");
        ApiHandle::new(HttpApi::default())
    })
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

/// Blocking browser confirm; anything but an explicit OK counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Callback that writes an input's value into one field of a form held in state.
pub fn form_setter<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<String>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

pub fn input_field(
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    required: bool,
    on_set: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_set.emit(input.value());
    });
    html! {
        <input
            type={kind}
            placeholder={placeholder}
            value={value.to_string()}
            required={required}
            step={(kind == "number").then_some("0.01")}
            {oninput}
            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none"
        />
    }
}

pub fn message_row(colspan: usize, message: &str) -> Html {
    html! {
        <tr>
            <td colspan={colspan.to_string()} class="px-8 py-6 text-center text-muted-foreground">{ message.to_string() }</td>
        </tr>
    }
}

/// "Mês selecionado" / "Todos os meses" toggle.
pub fn mode_buttons(current: ListMode, on_mode: &Callback<ListMode>) -> Html {
    let button = |mode: ListMode, label: &'static str| {
        let on_mode = on_mode.clone();
        let class = classes!(
            "px-3",
            "py-1",
            "rounded-[10px]",
            "text-[11px]",
            "font-bold",
            if mode == current {
                vec!["active", "bg-[#173E63]", "text-white"]
            } else {
                vec!["bg-[#B2CBDE]", "text-[#173E63]"]
            }
        );
        html! {
            <button type="button" {class} onclick={Callback::from(move |_| on_mode.emit(mode))}>{ label }</button>
        }
    };
    html! {
        <div class="flex gap-2">
            { button(ListMode::Month, "Mês selecionado") }
            { button(ListMode::All, "Todos os meses") }
        </div>
    }
}

pub fn section_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <section class="bg-white rounded-[10px] shadow-sm border border-white/50 overflow-hidden">
            <div class="p-5 border-b border-border flex items-center justify-between gap-4">
                <h3 class="font-bold text-lg text-foreground">{ title }</h3>
                { actions }
            </div>
            <div class="p-5 space-y-4">
                { children }
            </div>
        </section>
    }
}
