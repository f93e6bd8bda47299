use crate::{features::FormError, prelude::*};

/// The personal information form of the vendor dashboard. Changes are
/// validated on save, but only kept for the lifetime of the page.
#[component]
pub fn Profile() -> impl IntoView {
	let profile = create_rw_signal(VendorProfile::default());
	let error = create_rw_signal(None::<ErrorType>);
	let saved = create_rw_signal(false);

	let field = move |getter: fn(&VendorProfile) -> &String| {
		Signal::derive(move || profile.with(|profile| getter(profile).clone()))
	};
	let setter = move |update: fn(&mut VendorProfile, String)| -> Box<dyn FnMut(ev::Event)> {
		Box::new(move |ev| {
			saved.set(false);
			profile.update(|profile| update(profile, event_target_value(&ev)));
		})
	};

	let about = field(|profile| &profile.about);

	let on_save = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		match profile.with_untracked(VendorProfile::validate) {
			Ok(()) => {
				info!("Profile saved");
				error.set(None);
				saved.set(true);
			}
			Err(err) => {
				warn!("Unable to save profile: {}", err);
				error.set(Some(err));
				saved.set(false);
			}
		}
	};

	view! {
		<ContainerMain class="full-width full-height mb-md">
			<PageHeader title="Profile"/>

			<ContainerBody class="gap-md">
				<section class="txt-white fc-fs-fs full-width px-xl py-lg br-sm bg-secondary-light">
					<div class="fr-fs-ct full-width pb-sm ul-light">
						<h2 class="letter-sp-md txt-md">"Personal Information"</h2>
					</div>

					<form class="full-width gap-md fc-fs-fs pt-md" on:submit={on_save}>
						<div class="flex full-width px-md">
							<div class="flex-col-2 fr-fs-fs">
								<label html_for="first_name" class="mt-sm txt-sm">
									"Name"
								</label>
							</div>

							<div class="flex-col-5 fc-fs-fs pr-xs">
								<Input
									id="first_name"
									class="full-width"
									placeholder="First Name"
									variant={SecondaryColorVariant::Medium}
									value={field(|profile| &profile.first_name)}
									on_input={setter(|profile, value| profile.first_name = value)}
								/>
							</div>

							<div class="flex-col-5 fc-fs-fs pl-xs">
								<Input
									id="last_name"
									class="full-width"
									placeholder="Last Name"
									variant={SecondaryColorVariant::Medium}
									value={field(|profile| &profile.last_name)}
									on_input={setter(|profile, value| profile.last_name = value)}
								/>
							</div>
						</div>

						<div class="flex full-width px-md">
							<div class="flex-col-2 fr-fs-fs">
								<label html_for="email" class="mt-sm txt-sm">
									"Email"
								</label>
							</div>

							<div class="flex-col-10 fc-fs-fs">
								<Input
									id="email"
									class="full-width"
									r#type={InputType::Email}
									placeholder="Email Address"
									variant={SecondaryColorVariant::Medium}
									value={field(|profile| &profile.email)}
									on_input={setter(|profile, value| profile.email = value)}
								/>
							</div>
						</div>

						<div class="flex full-width px-md">
							<div class="flex-col-2 fr-fs-fs">
								<label html_for="phone" class="mt-sm txt-sm">
									"Phone"
								</label>
							</div>

							<div class="flex-col-10 fc-fs-fs">
								<Input
									id="phone"
									class="full-width"
									r#type={InputType::Phone}
									placeholder="Phone Number"
									variant={SecondaryColorVariant::Medium}
									value={field(|profile| &profile.phone)}
									on_input={setter(|profile, value| profile.phone = value)}
								/>
							</div>
						</div>

						<div class="flex full-width px-md">
							<div class="flex-col-2 fr-fs-fs">
								<label html_for="about" class="mt-sm txt-sm">
									"About Yourself"
								</label>
							</div>

							<div class="flex-col-10 fc-fs-fs">
								<textarea
									id="about"
									class="full-width br-sm bg-secondary-medium p-md"
									rows="5"
									prop:value={move || about.get()}
									on:input={move |ev| {
										saved.set(false);
										profile.update(|profile| profile.about = event_target_value(&ev));
									}}
								></textarea>
							</div>
						</div>

						<FormError error={error}/>
						<Show when={move || saved.get()}>
							<p class="txt-success txt-sm px-md">"Profile saved"</p>
						</Show>

						<div class="fr-fe-ct full-width px-md">
							<button type="submit" class="btn btn-primary">
								"Save Changes"
							</button>
						</div>
					</form>
				</section>
			</ContainerBody>
		</ContainerMain>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn renders_personal_information_form() {
		let runtime = create_runtime();
		let html = view! { <Profile/> }
			.into_view()
			.render_to_string()
			.to_string();
		runtime.dispose();

		assert!(html.contains("Personal Information"));
		assert!(html.contains("id=\"email\""));
		assert!(html.contains("Save Changes"));
		assert!(!html.contains("Profile saved"));
	}
}
