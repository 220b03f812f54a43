use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_clock() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 7v5l3 3")
}
pub fn icon_layers() -> Html {
    icon_base("M12 2l10 5-10 5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
