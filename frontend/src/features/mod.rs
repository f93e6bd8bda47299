/// Admin console features
pub mod admin;
/// Vendor dashboard features, shared with the mentor dashboard
pub mod vendor_dashboard;

pub use self::{admin::*, vendor_dashboard::*};

use crate::prelude::*;

/// Shows the outcome of the last action of a form, if it failed
#[component]
fn FormError(
	/// The error of the last action, if any
	#[prop(into)]
	error: Signal<Option<ErrorType>>,
) -> impl IntoView {
	move || {
		error.get().map(|error| {
			view! { <p class="txt-error txt-sm px-md">{error.message()}</p> }
		})
	}
}
