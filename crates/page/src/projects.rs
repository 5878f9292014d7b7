//! Project records and their sources.
//!
//! The gallery consumes a fixed, ordered list of records. The built-in
//! list is compiled in; [`from_toml_str`] supports loading the same schema
//! from an external TOML document instead, the designated extension point
//! for a future backend.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single portfolio item, as rendered into one gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
	/// Stable identifier, unique within the list.
	pub id: u32,
	/// Card heading.
	pub title: String,
	/// Card body text.
	pub description: String,
	/// Preview image URL.
	pub image: String,
	/// Technology badges, rendered in list order.
	pub technologies: Vec<String>,
	/// "View Code" link target.
	pub code_link: String,
	/// "Live Demo" link target.
	pub demo_link: String,
}

#[derive(Deserialize)]
struct ProjectList {
	#[serde(default, rename = "project")]
	projects: Vec<Project>,
}

/// Parses a project list from a TOML document of `[[project]]` tables.
pub fn from_toml_str(input: &str) -> Result<Vec<Project>> {
	let list: ProjectList = toml::from_str(input)?;
	Ok(list.projects)
}

/// The compiled-in project list.
pub fn builtin() -> Vec<Project> {
	vec![
		Project {
			id: 1,
			title: "E-Commerce Product Page".to_string(),
			description: "A responsive product page with image gallery, reviews, and \
			              add-to-cart functionality. Built with HTML, CSS, and JavaScript."
				.to_string(),
			image: "https://via.placeholder.com/400x250?text=E-Commerce+Store".to_string(),
			technologies: tech_stack(),
			code_link: "#".to_string(),
			demo_link: "#".to_string(),
		},
		Project {
			id: 2,
			title: "Weather App".to_string(),
			description: "Real-time weather application that fetches data from an API. \
			              Shows temperature, humidity, and 5-day forecast with beautiful UI."
				.to_string(),
			image: "https://via.placeholder.com/400x250?text=Weather+App".to_string(),
			technologies: tech_stack(),
			code_link: "#".to_string(),
			demo_link: "#".to_string(),
		},
		Project {
			id: 3,
			title: "Task Management App".to_string(),
			description: "A to-do list application with add, edit, delete, and \
			              mark-complete features. Data persists using browser localStorage."
				.to_string(),
			image: "https://via.placeholder.com/400x250?text=Task+Manager".to_string(),
			technologies: tech_stack(),
			code_link: "#".to_string(),
			demo_link: "#".to_string(),
		},
	]
}

fn tech_stack() -> Vec<String> {
	["HTML5", "CSS3", "JavaScript"]
		.into_iter()
		.map(String::from)
		.collect()
}
