use crate::imports::*;

/// The kind of value an [`Input`] accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputType {
	/// The default value. A single-line text field. Line-breaks are
	/// automatically removed from the input value.
	#[default]
	Text,
	/// A field for editing an email address. Looks like a text input, but has
	/// validation parameters and relevant keyboard in supporting browsers and
	/// devices with dynamic keyboards.
	Email,
	/// A control for entering a telephone number. Displays a telephone keypad
	/// in some devices with dynamic keypads.
	Phone,
}

impl InputType {
	/// The value of the `type` attribute of the input element
	pub const fn as_html_attribute(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Phone => "tel",
		}
	}
}

/// A single-line text field. The value is controlled by the `value` signal and
/// changes are reported through `on_input`.
#[component]
pub fn Input(
	/// Additional classnames to apply to the outer div, if any.
	#[prop(into, optional)]
	class: String,
	/// The ID of the input.
	#[prop(into, optional)]
	id: MaybeSignal<String>,
	/// Placeholder text for the input.
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// The type of input
	#[prop(into, optional, default = InputType::Text.into())]
	r#type: MaybeSignal<InputType>,
	/// Whether the input is disabled.
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Input event handler
	#[prop(optional, default = Box::new(|_| ()))]
	on_input: Box<dyn FnMut(ev::Event)>,
	/// The Color Variant of the input
	#[prop(into, optional)]
	variant: MaybeSignal<SecondaryColorVariant>,
	/// Label for the input, an empty string doesn't render the label,
	/// defaults to empty string
	#[prop(into, optional, default = "".into())]
	label: String,
	/// The current value of the input
	#[prop(into, optional)]
	value: MaybeSignal<String>,
) -> impl IntoView {
	let initial_value = value.clone();
	let class = move || {
		format!(
			"input fr-fs-ct row-card bg-secondary-{} {}",
			variant.get().as_css_name(),
			class
		)
	};

	let label = (!label.is_empty()).then(|| view! { <label>{label}</label> });

	view! {
		<div class={class}>
			{label}
			<input
				id={move || id.get()}
				class="mx-md of-hidden txt-of-ellipsis"
				placeholder={move || placeholder.get()}
				disabled={move || disabled.get()}
				on:input=on_input
				value={move || initial_value.get()}
				prop:value={move || value.get()}
				type={move || r#type.get().as_html_attribute()}
			/>
		</div>
	}
}
