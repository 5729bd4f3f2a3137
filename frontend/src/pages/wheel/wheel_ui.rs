use shared::catalog::PrizeTier;
use shared::i18n::{Language, UiText};
use shared::selector::SpinOutcome;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub language: Language,
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let text = UiText::for_language(props.language);
    let button_text = if props.is_spinning {
        text.spinning
    } else {
        text.spin_button
    };

    let is_disabled = props.is_spinning || props.disabled;
    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!(
            "relative",
            "overflow-hidden",
            "rounded-full",
            "w-full",
            "max-w-[300px]",
            button_class
        )}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub outcome: Option<SpinOutcome>,
    pub language: Language,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let text = UiText::for_language(props.language);

    match &props.outcome {
        Some(SpinOutcome::Won(win)) => {
            let (gradient_classes, animation_class) = match win.tier {
                PrizeTier::Grand => (
                    "from-orange-400 to-orange-600 border-orange-300",
                    "animate-bounce",
                ),
                PrizeTier::Secondary => (
                    "from-blue-400 to-blue-600 border-blue-300",
                    "animate-pulse",
                ),
                PrizeTier::Consolation => (
                    "from-violet-400 to-violet-600 border-violet-300",
                    "animate-pulse",
                ),
                PrizeTier::None => (
                    "from-pink-400 to-pink-600 border-pink-300",
                    "animate-pulse",
                ),
            };

            html! {
                <div class="mt-8 mb-4 flex flex-col items-center justify-center">
                    <div class={classes!(
                        "flex",
                        "items-center",
                        "justify-center",
                        "px-6",
                        "py-4",
                        "rounded-xl",
                        "bg-gradient-to-r",
                        "text-white",
                        "font-bold",
                        "text-xl",
                        "shadow-lg",
                        "border-2",
                        "transform",
                        "transition-all",
                        "duration-500",
                        animation_class,
                        gradient_classes
                    )}>
                        <span>{format!("{}{}", text.won_prefix, win.label)}</span>
                    </div>
                    if !win.image.is_empty() {
                        <img
                            src={get_asset_url(&win.image)}
                            alt={win.label.clone()}
                            class="mt-4 h-[200px] rounded-lg shadow-md"
                        />
                    }
                </div>
            }
        }
        Some(SpinOutcome::Exhausted) => html! {
            <div class="mt-8 mb-4 flex justify-center">
                <p class="text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-800 px-6 py-4 rounded-xl text-lg">
                    {text.no_prize}
                </p>
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    pub language: Language,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let text = UiText::for_language(props.language);

    html! {
        <button class={styles::LANGUAGE_BUTTON} onclick={props.onclick.clone()}>
            {text.language_toggle}
        </button>
    }
}
