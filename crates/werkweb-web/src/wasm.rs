#![forbid(unsafe_code)]

//! `wasm-bindgen` DOM adapter.
//!
//! Scans the page, feeds the platform-independent [`Site`], and writes the
//! results back. Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Storage, Window,
};
use werkweb_i18n::{
    AssignmentTarget, Catalog, ElementKind, TranslatableElement, plan_document,
    plan_translations,
};

use crate::clock::SystemClock;
use crate::config::{DomConfig, SiteConfig};
use crate::controller::{LanguageChange, Subscription};
use crate::nav::NavDisclosure;
use crate::reservation::ReservationForm;
use crate::site::Site;
use crate::storage::{KeyValueStore, StorageError, StorageResult};

/// Id of an optional `<script type="application/json">` holding a [`SiteConfig`].
const CONFIG_ELEMENT_ID: &str = "werkweb-config";

thread_local! {
    static PAGE: RefCell<Option<WerkwebPage>> = const { RefCell::new(None) };
}

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

// ---------------------------------------------------------------------------
// localStorage capability
// ---------------------------------------------------------------------------

/// `window.localStorage`, or nothing when the browser refuses access.
#[derive(Debug)]
struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    fn open(window: &Window) -> Self {
        let inner = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                debug!(
                    target: "werkweb_web::dom",
                    error = %storage_error(&err),
                    "localStorage unavailable"
                );
                None
            }
        };
        Self { inner }
    }

    fn storage(&self) -> StorageResult<&Storage> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| storage_error(&err))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| storage_error(&err))
    }
}

fn storage_error(err: &JsValue) -> StorageError {
    let name = Reflect::get(err, &"name".into())
        .ok()
        .and_then(|v| v.as_string());
    match name.as_deref() {
        Some("QuotaExceededError") | Some("NS_ERROR_DOM_QUOTA_REACHED") => {
            StorageError::QuotaExceeded
        }
        Some("SecurityError") => StorageError::Unavailable,
        Some(other) => StorageError::Backend(other.to_owned()),
        None => StorageError::Backend(err.as_string().unwrap_or_else(|| "unknown".into())),
    }
}

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        debug!(target: "werkweb_web::dom", selector, "invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_placeholder(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_placeholder(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_placeholder(value);
    } else {
        let _ = element.set_attribute("placeholder", value);
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Render one language change onto the page.
fn render_language(document: &Document, dom: &DomConfig, change: &LanguageChange<'_>) {
    let update = plan_document(change.language, change.dictionary);
    if let Some(title) = update.title {
        document.set_title(title);
    }
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", update.lang);
        let _ = root.set_attribute("dir", update.dir.as_str());
    }

    let elements = query_all(document, &dom.translate_selector());
    let descriptors: Vec<TranslatableElement> = elements
        .iter()
        .map(|el| {
            TranslatableElement::new(
                el.get_attribute(&dom.translate_attribute)
                    .unwrap_or_default(),
                ElementKind::classify(&el.tag_name(), el.has_attribute("placeholder")),
            )
        })
        .collect();
    let assignments = plan_translations(change.dictionary, &descriptors);
    for assignment in &assignments {
        let element = &elements[assignment.index];
        match assignment.target {
            AssignmentTarget::TextContent => element.set_text_content(Some(assignment.value)),
            AssignmentTarget::Placeholder => set_placeholder(element, assignment.value),
        }
    }

    let code = change.language.code();
    if let Some(select) = document
        .get_element_by_id(&dom.language_select_id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        if select.value() != code {
            select.set_value(code);
        }
    }
    for button in query_all(document, &dom.language_button_selector) {
        let matches = button.get_attribute(&dom.language_attribute).as_deref() == Some(code);
        set_class(&button, &dom.active_class, matches);
    }

    debug!(
        target: "werkweb_web::dom",
        language = code,
        translatable = elements.len(),
        translated = assignments.len(),
        "rendered language"
    );
}

fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // Listeners live for the whole page.
        closure.forget();
    }
}

fn read_form(form: &HtmlFormElement) -> ReservationForm {
    let Ok(data) = FormData::new_with_form(form) else {
        return ReservationForm::default();
    };
    let text = |name: &str| data.get(name).as_string().unwrap_or_default();
    let checked = |name: &str| data.get(name).as_string().is_some_and(|v| !v.is_empty());
    ReservationForm {
        name: text("name"),
        contact: text("contact"),
        prefs: text("prefs"),
        voicemail: checked("voicemail"),
        admin_propose: checked("admin_propose"),
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

struct PageInner {
    window: Window,
    document: Document,
    config: SiteConfig,
    site: Site<LocalStorage>,
    render: RefCell<Option<Subscription>>,
}

/// Handle to the booted page, exposed to host scripts.
#[wasm_bindgen]
#[derive(Clone)]
pub struct WerkwebPage {
    inner: Rc<PageInner>,
}

#[wasm_bindgen]
impl WerkwebPage {
    /// Active language code.
    #[wasm_bindgen(js_name = currentLanguage)]
    pub fn current_language(&self) -> String {
        self.inner.site.controller().current().code().to_owned()
    }

    /// Apply a language code; non-whitelisted codes are ignored.
    #[wasm_bindgen(js_name = applyLanguage)]
    pub fn apply_language(&self, code: &str) -> bool {
        self.inner.site.controller().apply_code(code)
    }

    /// Stored reservations as a JSON array.
    #[wasm_bindgen(js_name = reservationsJson)]
    pub fn reservations_json(&self) -> String {
        serde_json::to_string(&self.inner.site.book().entries()).unwrap_or_else(|_| "[]".into())
    }
}

impl WerkwebPage {
    fn boot(window: Window, document: Document) -> Self {
        let config = load_config(&document);
        let store = Rc::new(LocalStorage::open(&window));
        let locale = window.navigator().language();
        let site = Site::new(
            Rc::new(Catalog::builtin()),
            store,
            &config,
            locale.as_deref(),
            Box::new(SystemClock),
        );
        let page = Self {
            inner: Rc::new(PageInner {
                window,
                document,
                config,
                site,
                render: RefCell::new(None),
            }),
        };

        let document = page.inner.document.clone();
        let dom = page.inner.config.dom.clone();
        let subscription = page
            .inner
            .site
            .controller()
            .subscribe(move |change| render_language(&document, &dom, change));
        *page.inner.render.borrow_mut() = Some(subscription);

        let controller = page.inner.site.controller();
        controller.apply(controller.current());

        page.wire_language_buttons();
        page.wire_language_select();
        page.wire_nav_toggles();
        page.wire_action();
        page.wire_reservation_form();
        page
    }

    fn wire_language_buttons(&self) {
        let dom = &self.inner.config.dom;
        let buttons = query_all(&self.inner.document, &dom.language_button_selector);
        debug!(target: "werkweb_web::dom", count = buttons.len(), "wiring language buttons");
        for button in buttons {
            let inner = Rc::clone(&self.inner);
            let target = button.clone();
            listen(&button, "click", move |_| {
                if let Some(code) = target.get_attribute(&inner.config.dom.language_attribute) {
                    inner.site.controller().apply_code(&code);
                }
            });
        }
    }

    fn wire_language_select(&self) {
        let dom = &self.inner.config.dom;
        let Some(select) = self.inner.document.get_element_by_id(&dom.language_select_id) else {
            return;
        };
        let inner = Rc::clone(&self.inner);
        listen(&select, "change", move |event| {
            let value = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value());
            if let Some(code) = value {
                inner.site.controller().apply_code(&code);
            }
        });
    }

    fn wire_nav_toggles(&self) {
        let dom = &self.inner.config.dom;
        for toggle in query_all(&self.inner.document, &dom.nav_toggle_selector) {
            let menu = toggle
                .get_attribute("aria-controls")
                .and_then(|id| self.inner.document.get_element_by_id(&id));
            let Some(menu) = menu else {
                continue;
            };
            let open_class = dom.open_class.clone();
            let target = toggle.clone();
            listen(&toggle, "click", move |_| {
                let mut state =
                    NavDisclosure::from_aria(target.get_attribute("aria-expanded").as_deref());
                let update = state.toggle();
                let _ = target.set_attribute("aria-expanded", update.aria_expanded);
                if let Some(html) = menu.dyn_ref::<HtmlElement>() {
                    html.set_hidden(update.menu_hidden);
                }
                set_class(&menu, &open_class, update.menu_open_class);
            });
        }
    }

    fn wire_action(&self) {
        let Some(action) = self
            .inner
            .document
            .get_element_by_id(&self.inner.config.dom.action_id)
        else {
            return;
        };
        let inner = Rc::clone(&self.inner);
        listen(&action, "click", move |_| {
            let _ = inner.window.alert_with_message(&inner.site.action_message());
        });
    }

    fn wire_reservation_form(&self) {
        let dom = &self.inner.config.dom;
        let Some(form) = self
            .inner
            .document
            .get_element_by_id(&dom.reserve_form_id)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let inner = Rc::clone(&self.inner);
        let target = form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let response = inner.site.submit_reservation(&read_form(&target));
            if let Some(result) = inner
                .document
                .get_element_by_id(&inner.config.dom.reserve_result_id)
            {
                result.set_text_content(Some(&response.message));
            }
            if response.clear_form {
                target.reset();
            }
        });
    }
}

/// Read the optional JSON config element, falling back to defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json_str(&json) {
        Ok(config) => config,
        Err(err) => {
            console_error(&format!("werkweb: ignoring invalid config: {err}"));
            SiteConfig::default()
        }
    }
}

fn boot_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let page = WerkwebPage::boot(window, document);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Module entry point: boot once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let loading = Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading");
    if loading {
        let callback = Closure::once_into_js(boot_page);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    } else {
        boot_page();
    }
}

/// The booted page, if any.
#[wasm_bindgen(js_name = currentPage)]
pub fn current_page() -> Option<WerkwebPage> {
    PAGE.with(|slot| slot.borrow().clone())
}
