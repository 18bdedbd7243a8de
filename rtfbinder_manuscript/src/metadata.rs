/// The metadata of a particular manuscript
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
	/// The main title of this work
	pub title: String,
	pub(crate) running_title: Option<String>,
}

impl Metadata {

	pub(crate) fn new<S: Into<String>>(title: S) -> Self {
		Metadata {
			title: title.into(),
			..Default::default()
		}
	}

	pub(crate) fn running_title<S: Into<String>>(&mut self, running_title: S) {
		self.running_title = Some(running_title.into());
	}

	/// Get either the running title or the full title as a fallback
	pub fn get_running_title(&self) -> &str {
		self.running_title.as_deref()
			.unwrap_or(&self.title)
	}
}

/// The author of a manuscript, and the contact details which
/// go on its first page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Author {
	/// The name as it should appear under the title
	pub name: String,
	/// Surname, used in the running header
	pub surname: String,
	/// Street address
	pub street_address: String,
	/// Town or city
	pub address_locality: String,
	/// State, county or region
	pub address_region: String,
	/// Postal code
	pub postal_code: String,
	/// Email address
	pub email: String,
	/// Telephone number
	pub phone: String,
}

impl Author {
	/// An author known only by name; the surname is taken to be
	/// the last word of the name
	pub fn new<S: Into<String>>(name: S) -> Self {
		let name = name.into();
		let surname = name.split_whitespace()
			.last()
			.unwrap_or_default()
			.to_string();
		Author {
			name,
			surname,
			..Default::default()
		}
	}

	/// The line giving locality, region and postal code,
	/// e.g. `Springfield, OR 97403`
	pub fn locality_line(&self) -> String {
		let mut line = self.address_locality.clone();
		if !self.address_region.is_empty() || !self.postal_code.is_empty() {
			if !line.is_empty() {
				line.push_str(", ");
			}
			line.push_str(&self.address_region);
			if !self.address_region.is_empty() && !self.postal_code.is_empty() {
				line.push(' ');
			}
			line.push_str(&self.postal_code);
		}
		line
	}
}
