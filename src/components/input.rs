use dioxus::prelude::*;

const FIELD_CLASSES: &str =
    "w-full rounded-xl border border-gray-300 bg-white/90 px-3 py-2 text-sm outline-none focus:ring-2 focus:ring-blue-600";

/// Required single-line field, controlled by the caller.
#[component]
pub fn TextInput(
    #[props(into)] id: String,
    #[props(default = "text".to_string(), into)] kind: String,
    #[props(default, into)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>
) -> Element {
    rsx! {
        input {
            id: id.clone(),
            name: id,
            r#type: kind,
            placeholder,
            required: true,
            class: FIELD_CLASSES,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn TextArea(
    #[props(into)] id: String,
    #[props(default, into)] placeholder: String,
    #[props(default = 5)] rows: i64,
    value: String,
    oninput: EventHandler<FormEvent>
) -> Element {
    rsx! {
        textarea {
            id: id.clone(),
            name: id,
            placeholder,
            rows,
            required: true,
            class: FIELD_CLASSES,
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
