use crate::i18n::{t, tc};
use dreamdle_game::{GameMode, VictorySummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub summary: VictorySummary,
    pub share: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(VictoryModal)]
pub fn victory_modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }
    let summary = &props.summary;

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let text = tc(
        "victory.summary",
        summary.attempts,
        &[("name", summary.target_name.as_str())],
    );
    let clues = (summary.mode != GameMode::Classic && !summary.clues.is_empty()).then(|| {
        let joiner = if summary.mode == GameMode::Emoji { " " } else { "\n" };
        html! {
            <div class="victory-clues">
                <h3>{ t("victory.clues") }</h3>
                <p>{ summary.clues.join(joiner) }</p>
            </div>
        }
    });

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal victory"
                role="dialog"
                aria-modal="true"
                aria-labelledby="victory-title"
                tabindex="-1"
                onclick={stop}
                onkeydown={on_keydown}
            >
                <h2 id="victory-title">{ t("victory.title") }</h2>
                if let Some(src) = summary.target_image.clone() {
                    <img class="victory-portrait" src={src} alt={summary.target_name.clone()} />
                }
                <p class="victory-summary">{ text }</p>
                { for clues }
                <h3>{ t("victory.share") }</h3>
                <pre class="share-text">{ props.share.clone() }</pre>
                <button type="button" class="modal-close" onclick={on_close}>
                    { t("victory.close") }
                </button>
            </div>
        </div>
    }
}
