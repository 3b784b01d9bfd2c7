#![cfg(target_arch = "wasm32")]

use dreamdle_web::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn set_lang_persists_and_tags_document() {
    dreamdle_web::i18n::set_lang("pt");
    assert_eq!(dom::stored_item("dreamdle.locale").as_deref(), Some("pt"));
    let root = dom::document().document_element().expect("html element");
    assert_eq!(root.get_attribute("lang").as_deref(), Some("pt"));

    dreamdle_web::i18n::set_lang("en");
    assert_eq!(dom::stored_item("dreamdle.locale").as_deref(), Some("en"));
}

#[wasm_bindgen_test]
fn stored_token_becomes_bearer_header() {
    let storage = dom::window()
        .local_storage()
        .expect("storage access")
        .expect("local storage");
    storage
        .set_item(dreamdle_web::api::TOKEN_KEY, " abc ")
        .expect("write token");
    let token = dom::stored_item(dreamdle_web::api::TOKEN_KEY);
    assert_eq!(
        dreamdle_web::api::bearer(token.as_deref()).as_deref(),
        Some("Bearer abc")
    );
    storage
        .remove_item(dreamdle_web::api::TOKEN_KEY)
        .expect("clear token");
    assert_eq!(dom::stored_item(dreamdle_web::api::TOKEN_KEY), None);
}
