use crate::{features::FormError, prelude::*};

/// Lists the roles of the platform grouped by their category, and allows
/// adding and removing both categories and roles
#[component]
pub fn AdminRolesPage() -> impl IntoView {
	let catalog = create_rw_signal(RoleCatalog::seeded());
	let error = create_rw_signal(None::<ErrorType>);

	let category_name = create_rw_signal(String::new());
	let role_name = create_rw_signal(String::new());
	let selected_category = create_rw_signal(None::<ResourceId>);

	// Falls back to the first category until the user picks one
	let role_category = Signal::derive(move || {
		selected_category.get().or_else(|| {
			catalog.with(|catalog| catalog.categories().first().map(|category| category.id))
		})
	});

	let report = move |result: Result<(), ErrorType>| match result {
		Ok(()) => {
			error.set(None);
			true
		}
		Err(err) => {
			warn!("Unable to update role catalog: {}", err);
			error.set(Some(err));
			false
		}
	};

	let add_category = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		let mut result = Ok(());
		catalog.update(|catalog| {
			result = catalog
				.add_category(&category_name.get_untracked())
				.map(|category| info!("Added role category `{}`", category.name));
		});
		if report(result) {
			category_name.set(String::new());
		}
	};

	let add_role = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		let mut result = Err(ErrorType::UnknownCategory);
		if let Some(category_id) = role_category.get_untracked() {
			catalog.update(|catalog| {
				result = catalog
					.add_role(&role_name.get_untracked(), category_id)
					.map(|role| info!("Added role `{}`", role.name));
			});
		}
		if report(result) {
			role_name.set(String::new());
		}
	};

	let remove_category = move |category_id: ResourceId| {
		let mut result = Ok(());
		catalog.update(|catalog| {
			result = catalog.remove_category(category_id).map(|_| ());
		});
		if report(result) && selected_category.get_untracked() == Some(category_id) {
			selected_category.set(None);
		}
	};

	let remove_role = move |role_id: ResourceId| {
		let mut result = Ok(());
		catalog.update(|catalog| {
			result = catalog.remove_role(role_id).map(|_| ());
		});
		report(result);
	};

	let rows = move || {
		catalog.with(|catalog| {
			catalog
				.categories()
				.iter()
				.map(|category| {
					let category_id = category.id;
					let roles = catalog
						.roles_in(category_id)
						.map(|role| {
							let role_id = role.id;
							view! {
								<tr class="fr-fs-ct full-width px-xl py-sm ul-light">
									<td class="flex-col-10 pl-md">{role.name.clone()}</td>
									<td class="flex-col-2 fr-fe-ct">
										<button
											class="btn-plain txt-error txt-sm"
											on:click={move |_| remove_role(role_id)}
										>
											"Remove"
										</button>
									</td>
								</tr>
							}
						})
						.collect_view();

					view! {
						<tr class="fr-fs-ct full-width px-xl py-sm bg-secondary-medium">
							<td class="flex-col-10 txt-md txt-medium">{category.name.clone()}</td>
							<td class="flex-col-2 fr-fe-ct">
								<button
									class="btn-plain txt-error txt-sm"
									on:click={move |_| remove_category(category_id)}
								>
									"Remove category"
								</button>
							</td>
						</tr>
						{roles}
					}
				})
				.collect_view()
		})
	};

	let category_options = move || {
		catalog.with(|catalog| {
			catalog
				.categories()
				.iter()
				.map(|category| {
					let category_id = category.id;
					view! {
						<option
							value={category_id.to_string()}
							selected={move || role_category.get() == Some(category_id)}
						>
							{category.name.clone()}
						</option>
					}
				})
				.collect_view()
		})
	};

	view! {
		<ContainerMain class="full-width full-height mb-md">
			<PageHeader
				title="Roles"
				description="Create role categories and the roles that belong to them."
			/>

			<ContainerBody class="gap-md">
				<FormError error={error}/>

				<form class="fr-fs-ct full-width gap-md" on:submit={add_category}>
					<Input
						id="category-name"
						class="flex-col-8"
						placeholder="Category Name"
						variant={SecondaryColorVariant::Medium}
						value={category_name}
						on_input={Box::new(move |ev| category_name.set(event_target_value(&ev)))}
					/>
					<button type="submit" class="btn btn-primary flex-col-4">
						"Add Category"
					</button>
				</form>

				<form class="fr-fs-ct full-width gap-md" on:submit={add_role}>
					<Input
						id="role-name"
						class="flex-col-5"
						placeholder="Role Name"
						variant={SecondaryColorVariant::Medium}
						value={role_name}
						on_input={Box::new(move |ev| role_name.set(event_target_value(&ev)))}
					/>
					<select
						id="role-category"
						class="flex-col-3 bg-secondary-medium br-sm"
						on:change={move |ev| {
							selected_category.set(event_target_value(&ev).parse().ok())
						}}
					>
						{category_options}
					</select>
					<button type="submit" class="btn btn-primary flex-col-4">
						"Add Role"
					</button>
				</form>

				<ResourceTable
					columns={vec![TableColumn::new("Name", 10), TableColumn::new("", 2)]}
					is_empty={Signal::derive(move || {
						catalog.with(|catalog| catalog.categories().is_empty())
					})}
					empty_message="No role categories have been added yet"
					rows={rows.into_view()}
				/>
			</ContainerBody>
		</ContainerMain>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn renders_seeded_roles_grouped_by_category() {
		let runtime = create_runtime();
		let html = view! { <AdminRolesPage/> }
			.into_view()
			.render_to_string()
			.to_string();
		runtime.dispose();

		for name in [
			"Engineering",
			"Backend Engineer",
			"Frontend Engineer",
			"Design",
			"UX Designer",
			"Product Manager",
		] {
			assert!(html.contains(name), "missing `{name}`");
		}

		let engineering = html.find("Engineering").expect("category is rendered");
		let backend = html.find("Backend Engineer").expect("role is rendered");
		assert!(engineering < backend);
	}

	#[test]
	fn selected_category_values_parse_into_catalog_ids() {
		let catalog = RoleCatalog::seeded();
		let engineering: ResourceId = "1".parse().expect("option values are numeric");

		assert_eq!(
			catalog.category(engineering).map(|category| category.name.as_str()),
			Some("Engineering")
		);
	}
}
