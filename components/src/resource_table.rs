use crate::imports::*;

/// A column of a [`ResourceTable`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableColumn {
	/// The text of the column heading. May be empty, e.g. for action columns
	pub heading: &'static str,
	/// The share of the row this column takes, out of 12
	pub grid: u8,
}

impl TableColumn {
	/// Creates a column with the given heading and width
	pub const fn new(heading: &'static str, grid: u8) -> Self {
		Self { heading, grid }
	}
}

/// A table listing the resources of a catalog, such as roles or skills. The
/// rows are passed in already rendered. A message takes their place while the
/// catalog is empty.
#[component]
pub fn ResourceTable(
	/// The columns of the table, in order
	columns: Vec<TableColumn>,
	/// The rendered rows. Usually a `<For/>` over the catalog
	rows: View,
	/// Whether the catalog has nothing to list
	#[prop(into, optional)]
	is_empty: MaybeSignal<bool>,
	/// Shown while the catalog is empty
	#[prop(into, optional, default = "Nothing has been added yet".into())]
	empty_message: String,
	/// Additional class names to apply to the table, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || {
		format!(
			"fc-fs-fs br-sm of-hidden full-width txt-white {}",
			class.get()
		)
	};

	let headings = columns
		.iter()
		.map(|column| {
			view! {
				<th class={format!("fr-ct-ct txt-sm txt-medium flex-col-{}", column.grid)}>
					{column.heading}
				</th>
			}
		})
		.collect_view();

	view! {
		<table class={class}>
			<thead class="fr-ct-ct py-sm bg-secondary-medium full-width">
				<tr class="fr-ct-ct px-xl full-width">{headings}</tr>
			</thead>

			<tbody class="fc-fs-fs full-width full-height">
				{rows}
				<Show when={move || is_empty.get()}>
					<tr class="fr-ct-ct full-width py-md">
						<td class="txt-grey txt-sm">{empty_message.clone()}</td>
					</tr>
				</Show>
			</tbody>
		</table>
	}
}

#[cfg(test)]
mod test {
	use super::TableColumn;
	use crate::imports::*;

	const COLUMNS: [TableColumn; 2] = [TableColumn::new("Name", 10), TableColumn::new("", 2)];

	/// Renders the given view to HTML with a fresh reactive runtime
	fn render<F, IV>(view: F) -> String
	where
		F: FnOnce() -> IV,
		IV: IntoView,
	{
		let runtime = create_runtime();
		let html = view().into_view().render_to_string().to_string();
		runtime.dispose();
		html
	}

	#[test]
	fn renders_headings_with_their_widths() {
		let html = render(|| {
			view! {
				<ResourceTable
					columns={COLUMNS.to_vec()}
					rows={view! { <tr><td>"Rust"</td></tr> }.into_view()}
				/>
			}
		});

		assert!(html.contains("flex-col-10"));
		assert!(html.contains("flex-col-2"));
		assert!(html.contains("Name"));
		assert!(html.contains("Rust"));
		assert!(!html.contains("Nothing has been added yet"));
	}

	#[test]
	fn empty_catalogs_show_a_message() {
		let html = render(|| {
			view! {
				<ResourceTable
					columns={COLUMNS.to_vec()}
					rows={().into_view()}
					is_empty=true
					empty_message="No skills yet"
				/>
			}
		});

		assert!(html.contains("No skills yet"));
	}
}
