use crate::{features::FormError, prelude::*};

/// Lists the skills of the platform, and allows adding and removing them
#[component]
pub fn AdminSkillsPage() -> impl IntoView {
	let catalog = create_rw_signal(SkillCatalog::seeded());
	let error = create_rw_signal(None::<ErrorType>);

	let skill_name = create_rw_signal(String::new());
	let skill_description = create_rw_signal(String::new());

	let add_skill = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		let mut result = Ok(());
		catalog.update(|catalog| {
			result = catalog
				.add_skill(
					&skill_name.get_untracked(),
					&skill_description.get_untracked(),
				)
				.map(|skill| info!("Added skill `{}`", skill.name));
		});

		match result {
			Ok(()) => {
				error.set(None);
				skill_name.set(String::new());
				skill_description.set(String::new());
			}
			Err(err) => {
				warn!("Unable to add skill: {}", err);
				error.set(Some(err));
			}
		}
	};

	let remove_skill = move |skill_id: ResourceId| {
		let mut result = Ok(());
		catalog.update(|catalog| {
			result = catalog.remove_skill(skill_id).map(|_| ());
		});
		error.set(result.err());
	};

	view! {
		<ContainerMain class="full-width full-height mb-md">
			<PageHeader
				title="Skills"
				description="Create and remove the skills mentors and roles can list."
			/>

			<ContainerBody class="gap-md">
				<FormError error={error}/>

				<form class="fr-fs-ct full-width gap-md" on:submit={add_skill}>
					<Input
						id="skill-name"
						class="flex-col-4"
						placeholder="Skill Name"
						variant={SecondaryColorVariant::Medium}
						value={skill_name}
						on_input={Box::new(move |ev| skill_name.set(event_target_value(&ev)))}
					/>
					<Input
						id="skill-description"
						class="flex-col-5"
						placeholder="Description"
						variant={SecondaryColorVariant::Medium}
						value={skill_description}
						on_input={Box::new(move |ev| skill_description.set(event_target_value(&ev)))}
					/>
					<button type="submit" class="btn btn-primary flex-col-3">
						"Add Skill"
					</button>
				</form>

				<ResourceTable
					columns={vec![
						TableColumn::new("Name", 4),
						TableColumn::new("Description", 6),
						TableColumn::new("", 2),
					]}
					is_empty={Signal::derive(move || catalog.with(|catalog| catalog.skills().is_empty()))}
					empty_message="No skills have been added yet"
					rows={view! {
						<For
							each={move || catalog.with(|catalog| catalog.skills().to_vec())}
							key={|skill| skill.id}
							let:skill
						>
							<tr class="fr-fs-ct full-width px-xl py-sm ul-light">
								<td class="flex-col-4">{skill.name}</td>
								<td class="flex-col-6 txt-grey">{skill.description}</td>
								<td class="flex-col-2 fr-fe-ct">
									<button
										class="btn-plain txt-error txt-sm"
										on:click={move |_| remove_skill(skill.id)}
									>
										"Remove"
									</button>
								</td>
							</tr>
						</For>
					}.into_view()}
				/>
			</ContainerBody>
		</ContainerMain>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn renders_seeded_skills() {
		let runtime = create_runtime();
		let html = view! { <AdminSkillsPage/> }
			.into_view()
			.render_to_string()
			.to_string();
		runtime.dispose();

		assert!(html.contains("Rust"));
		assert!(html.contains("Systems programming with Rust"));
		assert!(html.contains("User Research"));
		assert!(html.contains("Add Skill"));
	}
}
