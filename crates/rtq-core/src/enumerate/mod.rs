//! Job enumeration: cartesian product of characters and actions.
//!
//! Enumeration fixes the order of the whole run once. Both input sets are
//! sorted by file name so the product is deterministic across platforms,
//! and the queue on disk is always a suffix of this sequence.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::CoreError;
use rtq_model::{BatchSpec, Job, Queue};

/// Build the ordered job list for the given batch spec.
///
/// For every character environment (outer) and every action input (inner)
/// one job is produced, with the output named
/// `<character-stem>_<action-stem>.<environment-extension>` inside the
/// output directory.
///
/// Fails with [`CoreError::EmptyInputSet`] if either filtered set is
/// empty; in that case nothing is created on disk. On success the output
/// directory is created if absent.
pub fn enumerate_jobs(spec: &BatchSpec) -> Result<Queue, CoreError> {
    spec.validate()?;

    let characters_dir = absolute_dir(&spec.characters_dir)?;
    let actions_dir = absolute_dir(&spec.actions_dir)?;

    let env_suffix = spec.normalized_environment_suffix();
    let action_suffix = spec.normalized_action_suffix();

    let characters = scan_dir(&characters_dir, &env_suffix)?;
    if characters.is_empty() {
        return Err(CoreError::EmptyInputSet {
            dir: characters_dir,
            suffix: env_suffix,
        });
    }
    let actions = scan_dir(&actions_dir, &action_suffix)?;
    if actions.is_empty() {
        return Err(CoreError::EmptyInputSet {
            dir: actions_dir,
            suffix: action_suffix,
        });
    }

    let output_dir =
        std::path::absolute(&spec.output_dir).map_err(|e| CoreError::OutputDir(e.to_string()))?;
    std::fs::create_dir_all(&output_dir).map_err(|e| CoreError::OutputDir(e.to_string()))?;

    let mut jobs = Vec::with_capacity(characters.len() * actions.len());
    for character in &characters {
        for action in &actions {
            let output = output_dir.join(output_name(character, action));
            trace!(
                character = %character.display(),
                action = %action.display(),
                output = %output.display(),
                "job enumerated",
            );
            jobs.push(Job::new(character.clone(), action.clone(), output));
        }
    }

    debug!(
        characters = characters.len(),
        actions = actions.len(),
        jobs = jobs.len(),
        "job enumeration complete",
    );
    Ok(Queue::from_jobs(jobs))
}

/// List files in `dir` whose extension equals `suffix` (case-insensitive),
/// sorted by file name.
fn scan_dir(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, CoreError> {
    let unreadable = |reason: String| CoreError::InputDirUnreadable {
        dir: dir.to_path_buf(),
        reason,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| unreadable(e.to_string()))? {
        let entry = entry.map_err(|e| unreadable(e.to_string()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(suffix))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort_by_key(|p| p.file_name().map(OsStr::to_os_string));
    Ok(files)
}

/// `<character-stem>_<action-stem>.<environment-extension>`
fn output_name(character: &Path, action: &Path) -> String {
    let char_stem = character
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let action_stem = action
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match character.extension() {
        Some(ext) => format!("{char_stem}_{action_stem}.{}", ext.to_string_lossy()),
        None => format!("{char_stem}_{action_stem}"),
    }
}

fn absolute_dir(dir: &Path) -> Result<PathBuf, CoreError> {
    std::path::absolute(dir).map_err(|e| CoreError::InputDirUnreadable {
        dir: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtq_model::RotationEuler;

    fn mk_spec(root: &Path) -> BatchSpec {
        BatchSpec {
            characters_dir: root.join("chars"),
            actions_dir: root.join("actions"),
            output_dir: root.join("out"),
            environment_suffix: "blend".into(),
            action_suffix: "fbx".into(),
            preset: "remap_preset_to_smal".into(),
            rotation: RotationEuler::ZERO,
        }
    }

    fn touch(path: &Path) {
        std::fs::write(path, b"x").unwrap();
    }

    fn setup(root: &Path, characters: &[&str], actions: &[&str]) {
        std::fs::create_dir_all(root.join("chars")).unwrap();
        std::fs::create_dir_all(root.join("actions")).unwrap();
        for c in characters {
            touch(&root.join("chars").join(c));
        }
        for a in actions {
            touch(&root.join("actions").join(a));
        }
    }

    #[test]
    fn product_has_m_times_n_jobs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["B.blend", "A.blend"], &["Y.fbx", "X.fbx"]);

        let queue = enumerate_jobs(&mk_spec(dir.path())).unwrap();
        assert_eq!(queue.len(), 4);

        let names: Vec<String> = queue
            .iter()
            .map(|j| {
                j.output_path
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(
            names,
            vec!["A_X.blend", "A_Y.blend", "B_X.blend", "B_Y.blend"]
        );
    }

    #[test]
    fn suffix_filter_is_case_insensitive_and_strict() {
        let dir = tempfile::tempdir().unwrap();
        setup(
            dir.path(),
            &["A.blend", "B.BLEND", "notes.txt"],
            &["X.FBX", "skip.obj"],
        );

        let queue = enumerate_jobs(&mk_spec(dir.path())).unwrap();
        assert_eq!(queue.len(), 2);
        for job in queue.iter() {
            assert!(job.action_input_path.to_string_lossy().contains("X.FBX"));
        }
    }

    #[test]
    fn empty_actions_fails_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["A.blend"], &[]);

        let spec = mk_spec(dir.path());
        let err = enumerate_jobs(&spec).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInputSet { .. }));
        assert!(
            !spec.output_dir.exists(),
            "output dir must not be created on bootstrap failure"
        );
    }

    #[test]
    fn empty_characters_fails() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &[], &["X.fbx"]);

        let err = enumerate_jobs(&mk_spec(dir.path())).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInputSet { .. }));
    }

    #[test]
    fn output_dir_is_created_on_success() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["A.blend"], &["X.fbx"]);

        let spec = mk_spec(dir.path());
        enumerate_jobs(&spec).unwrap();
        assert!(spec.output_dir.is_dir());
    }

    #[test]
    fn job_paths_are_absolute() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["A.blend"], &["X.fbx"]);

        let queue = enumerate_jobs(&mk_spec(dir.path())).unwrap();
        let job = queue.front().unwrap();
        assert!(job.source_environment_path.is_absolute());
        assert!(job.action_input_path.is_absolute());
        assert!(job.output_path.is_absolute());
    }
}
