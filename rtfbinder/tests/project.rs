use rtfbinder::deserialization::DeserializableProject;
use rtfbinder::{create_rtf_from_json, load_project, ProjectError, RenderError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

static LONG_WAY_ROUND: &str = include_str!("long_way_round.json");

static SCENES: &[(&str, &str)] = &[
	("synopsis.md", "Jane goes home, slowly."),
	("leaving.md", "This draft scene is left out."),
	("station.md", "The train was *late*, as trains are.[^Not always.]\n\nShe checked [the map](http://example.com/map) again."),
	("home.md", "# Home\n\n1. unpack\n\n2. sleep\n\n[comment]: cut the list?\n"),
	("letter.md", "Dear **Tom**, I arrived."),
];

fn project_dir(scenes: &[(&str, &str)]) -> TempDir {
	let dir = tempfile::tempdir().unwrap();
	let text = dir.path().join("text");
	fs::create_dir(&text).unwrap();
	for (name, content) in scenes {
		fs::write(text.join(name), content).unwrap();
	}
	fs::write(dir.path().join("project.json"), LONG_WAY_ROUND).unwrap();
	dir
}

fn read_output(dir: &Path) -> String {
	fs::read_to_string(dir.join("long_way_round.rtf")).unwrap()
}

#[test]
fn writes_a_complete_manuscript() {
	let dir = project_dir(SCENES);
	let report = create_rtf_from_json(LONG_WAY_ROUND, dir.path()).unwrap();
	assert!(report.is_complete());
	assert_eq!(report.chapters_written, 2);
	assert_eq!(report.rounded_word_count(), 100);

	let rtf = read_output(dir.path());
	assert!(rtf.starts_with("{\\rtf1\\ansi"));
	assert!(rtf.trim_end().ends_with('}'));
	assert!(rtf.contains("approx. 100 words"));
	assert!(!rtf.contains("TMPPROX"));

	// running header and title page
	assert!(rtf.contains("Roe / LONG WAY / \\chpgn"));
	assert!(rtf.contains("1 Main St \\line\nSpringfield, OR 97403 \\line\njane@example.com"));
	assert!(rtf.contains("{\\b Synopsis}"));
	assert!(rtf.contains("Jane goes home, slowly."));

	// only the chapters tagged `final`, numbered as they appear
	assert!(!rtf.contains("Departure"));
	assert!(!rtf.contains("This draft scene"));
	assert!(rtf.contains("{\\b CHAPTER 1}{\\tc CHAPTER 1}"));
	assert!(rtf.contains("{\\b Arrival}"));
	assert!(rtf.contains("{\\b CHAPTER 2}{\\tc CHAPTER 2}"));
	assert!(rtf.contains("{\\b Afterwards}"));
	assert!(!rtf.contains("CHAPTER 3"));
	assert!(rtf.find("Arrival").unwrap() < rtf.find("Afterwards").unwrap());

	// scene markup
	assert!(rtf.contains("{\\i late\\i0}"));
	assert!(rtf.contains("{\\super\\chftn}{\\footnote"));
	assert!(rtf.contains("HYPERLINK \"http://example.com/map\""));
	assert!(rtf.contains("{\\b Home\\b0}"));
	assert!(rtf.contains("1. \\tab unpack"));
	assert!(rtf.contains("2. \\tab sleep"));
	assert!(!rtf.contains("cut the list"));
	assert!(rtf.contains("Dear {\\b Tom\\b0}, I arrived."));

	// one separator, between the two scenes of the first chapter
	assert_eq!(rtf.matches("\\qc \\sa720 ###").count(), 1);
}

#[test]
fn loading_resolves_paths_beside_the_project_file() {
	let dir = project_dir(SCENES);
	let project = load_project(dir.path().join("project.json")).unwrap();
	assert_eq!(project.scenes.scene_dir(), dir.path().join("text"));
	assert_eq!(project.output, dir.path().join("long_way_round.rtf"));

	let report = project.write().unwrap();
	assert!(report.is_complete());
	assert!(dir.path().join("long_way_round.rtf").is_file());
}

#[test]
fn missing_scenes_are_left_out() {
	let scenes: Vec<(&str, &str)> = SCENES.iter()
		.copied()
		.filter(|(name, _)| *name != "home.md")
		.collect();
	let dir = project_dir(&scenes);
	let report = create_rtf_from_json(LONG_WAY_ROUND, dir.path()).unwrap();
	assert_eq!(report.missing_scenes, vec![dir.path().join("text").join("home.md")]);

	let rtf = read_output(dir.path());
	assert!(rtf.contains("CHAPTER 2"));
	assert!(!rtf.contains("unpack"));
}

#[test]
fn strict_projects_refuse_missing_scenes() {
	let scenes: Vec<(&str, &str)> = SCENES.iter()
		.copied()
		.filter(|(name, _)| *name != "synopsis.md")
		.collect();
	let dir = project_dir(&scenes);
	fs::write(dir.path().join("long_way_round.rtf"), "stale").unwrap();

	let mut src = DeserializableProject::new(LONG_WAY_ROUND).unwrap();
	src.settings.strict = true;
	let project = src.into_project(dir.path()).unwrap();
	match project.write() {
		Err(RenderError::IncompleteDocument { missing }) => {
			assert_eq!(missing, vec![dir.path().join("text").join("synopsis.md")]);
		},
		other => panic!("expected an incomplete document, got {:?}", other)
	}
	assert!(!dir.path().join("long_way_round.rtf").exists());
}

#[test]
fn project_errors() {
	let dir = tempfile::tempdir().unwrap();
	match create_rtf_from_json(LONG_WAY_ROUND, dir.path()) {
		Err(ProjectError::MissingSceneDir(p)) => assert_eq!(p, dir.path().join("text")),
		other => panic!("expected a missing scene directory, got {:?}", other)
	}
	match create_rtf_from_json("{\"chapters\": []}", dir.path()) {
		Err(ProjectError::Parse(_)) => {},
		other => panic!("expected a parse error, got {:?}", other)
	}
	match load_project(dir.path().join("absent.json")) {
		Err(ProjectError::Read { path, .. }) => assert_eq!(path, dir.path().join("absent.json")),
		other => panic!("expected a read error, got {:?}", other)
	}
}
