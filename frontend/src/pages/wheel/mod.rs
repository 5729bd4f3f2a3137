mod effects;
mod wheel_canvas;
mod wheel_geometry;
mod wheel_ui;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared::catalog::{Catalog, PrizeEntry};
use shared::constants::{GAME_DATA_PATH, MIN_SPINS, SPIN_DURATION_MS};
use shared::i18n::UiText;
use shared::selector::{SpinOutcome, ThreadRngSource};
use shared::session::WheelSession;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::components::Confetti;
use crate::config::get_asset_url;
use crate::hooks::{dispatch_language_event, use_language};
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_geometry::{ease_out_cubic, layout_slices, target_rotation, WheelSlice};
use wheel_ui::{LanguageToggle, ResultDisplay, SpinButton};

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    // Authoritative game state lives in RefCells so overlapping click
    // handlers settle against it synchronously; the use_state mirrors
    // below exist only to drive rendering.
    let catalog_ref = use_mut_ref(|| None::<Catalog>);
    let session_ref = use_mut_ref(WheelSession::new);

    let slices = use_state(|| None::<Rc<Vec<WheelSlice>>>);
    let loading = use_state(|| true);
    let load_failed = use_state(|| false);
    let is_spinning = use_state(|| false);
    let outcome = use_state(|| None::<SpinOutcome>);
    let rotation = use_state(|| 0.0f64);
    let burst = use_state(|| 0u32);

    let language = use_language();

    // Load the catalog once on mount
    {
        let catalog_ref = catalog_ref.clone();
        let slices = slices.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_catalog().await {
                    Ok(catalog) => {
                        slices.set(Some(Rc::new(layout_slices(catalog.entries()))));
                        *catalog_ref.borrow_mut() = Some(catalog);
                        // Let the loading state stay visible long enough
                        // not to flash
                        TimeoutFuture::new(300).await;
                        loading.set(false);
                    }
                    Err(message) => {
                        log::error!("{}", message);
                        load_failed.set(true);
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let on_spin = {
        let catalog_ref = catalog_ref.clone();
        let session_ref = session_ref.clone();
        let slices = slices.clone();
        let is_spinning = is_spinning.clone();
        let outcome = outcome.clone();
        let rotation = rotation.clone();
        let burst = burst.clone();

        Callback::from(move |_: MouseEvent| {
            let current_slices = match &*slices {
                Some(slices) => slices.clone(),
                None => return,
            };

            if !session_ref.borrow_mut().try_begin_spin() {
                return;
            }

            let result = {
                let mut catalog = catalog_ref.borrow_mut();
                match catalog.as_mut() {
                    Some(catalog) => {
                        let mut rng = ThreadRngSource;
                        catalog.select_and_consume(&mut rng)
                    }
                    None => {
                        session_ref.borrow_mut().cancel_spin();
                        return;
                    }
                }
            };

            match result {
                SpinOutcome::Exhausted => {
                    session_ref.borrow_mut().complete_spin(SpinOutcome::Exhausted);
                    outcome.set(Some(SpinOutcome::Exhausted));
                    effects::play_no_prize_sound();
                }
                SpinOutcome::Won(win) => {
                    is_spinning.set(true);
                    outcome.set(None);

                    let target = target_rotation(
                        &current_slices,
                        win.catalog_index,
                        *rotation,
                        MIN_SPINS,
                    );

                    let session_ref = session_ref.clone();
                    let catalog_ref = catalog_ref.clone();
                    let is_spinning = is_spinning.clone();
                    let outcome = outcome.clone();
                    let burst = burst.clone();
                    let next_burst = *burst + 1;

                    animate_spin(rotation.clone(), *rotation, target, move || {
                        let tier = win.tier;
                        session_ref
                            .borrow_mut()
                            .complete_spin(SpinOutcome::Won(win.clone()));
                        if let Some(catalog) = catalog_ref.borrow().as_ref() {
                            persist_catalog(catalog);
                        }
                        is_spinning.set(false);
                        outcome.set(Some(SpinOutcome::Won(win)));
                        effects::play_tier_sound(tier);
                        burst.set(next_burst);
                    });
                }
            }
        })
    };

    let on_toggle_language = {
        let language = language.clone();
        let session_ref = session_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let new_language = (*language).toggle();
            session_ref.borrow_mut().language = new_language;
            dispatch_language_event(new_language);
        })
    };

    let text = UiText::for_language(*language);

    let card_body = if *loading {
        html! {
            <div class="flex items-center justify-center py-16">
                <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                <span class="ml-3 text-gray-700 dark:text-gray-300 font-medium">{text.loading}</span>
            </div>
        }
    } else if *load_failed {
        html! { <p class={styles::ERROR_BOX}>{text.load_error}</p> }
    } else if let Some(slices) = &*slices {
        html! {
            <>
                <div class={styles::WHEEL_WRAP}>
                    <div class="relative w-full max-w-[450px] mx-auto">
                        <WheelCanvas
                            slices={slices.clone()}
                            rotation={*rotation}
                            is_spinning={*is_spinning}
                        />
                        <Confetti burst={*burst} />
                    </div>
                </div>

                <div class="flex justify-center mt-4">
                    <SpinButton
                        language={*language}
                        is_spinning={*is_spinning}
                        disabled={false}
                        onclick={on_spin}
                    />
                </div>

                <ResultDisplay outcome={(*outcome).clone()} language={*language} />
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class={styles::PAGE}>
            <div class="flex justify-end mb-4">
                <LanguageToggle language={*language} onclick={on_toggle_language} />
            </div>

            <h1 class={styles::TITLE}>
                <span class={styles::TITLE_ACCENT}>{text.title}</span>
            </h1>

            <div class={styles::CARD}>
                { card_body }
            </div>
        </div>
    }
}

async fn fetch_catalog() -> Result<Catalog, String> {
    let response = Request::get(&get_asset_url(GAME_DATA_PATH))
        .send()
        .await
        .map_err(|err| format!("failed to fetch game data: {:?}", err))?;

    if !response.ok() {
        return Err(format!(
            "game data request returned status {}",
            response.status()
        ));
    }

    let entries: Vec<PrizeEntry> = response
        .json()
        .await
        .map_err(|err| format!("malformed game data: {:?}", err))?;

    Catalog::from_entries(entries).map_err(|err| format!("invalid prize catalog: {}", err))
}

/// Drives the wheel from `start_rotation` to `final_rotation` with an
/// eased requestAnimationFrame loop, then hands control to `on_rest`.
fn animate_spin(
    rotation: UseStateHandle<f64>,
    start_rotation: f64,
    final_rotation: f64,
    on_rest: impl FnOnce() + 'static,
) {
    let start_time = js_sys::Date::now();
    let rotation_change = final_rotation - start_rotation;
    let on_rest = Rc::new(RefCell::new(Some(Box::new(on_rest) as Box<dyn FnOnce()>)));

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = js_sys::Date::now() - start_time;
        let progress = (elapsed / SPIN_DURATION_MS).min(1.0);

        let eased_progress = ease_out_cubic(progress);
        rotation.set(start_rotation + rotation_change * eased_progress);

        if progress < 1.0 {
            if let Some(window) = window() {
                let _ = window.request_animation_frame(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        } else {
            rotation.set(final_rotation);
            if let Some(on_rest) = on_rest.borrow_mut().take() {
                on_rest();
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = window() {
        let _ = window.request_animation_frame(
            g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        );
    }
}

// Stock changes are session-only: the original deployment never settled on
// a durable store, so this stays a stub rather than inventing one.
fn persist_catalog(catalog: &Catalog) {
    log::debug!(
        "skipping catalog persistence ({} prizes left in stock)",
        catalog.total_quantity()
    );
}
