// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/crop.rs
//
// Margin cropping through an external command.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use super::settings::ExportSettings;
use crate::constant::{CROP_TEMP_SUFFIX, DEFAULT_THRESHOLD};

#[derive(Debug, Error)]
pub enum CropError {
    #[error("no crop command configured")]
    NotConfigured,

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}: {detail}")]
    Failed {
        program: String,
        status: ExitStatus,
        detail: String,
    },

    #[error("crop command produced no file at {}", path.display())]
    MissingOutput { path: PathBuf },

    #[error("failed to replace {} with the cropped file: {source}", path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that writes a margin-cropped copy of `input` to `output`.
pub trait MarginCropper {
    fn crop(&self, settings: &ExportSettings, input: &Path, output: &Path)
    -> Result<(), CropError>;
}

/// Build the crop command arguments for `settings`.
///
/// `-a` is only passed for a positive margin and `-t` only when the
/// threshold differs from the command's own default.
pub fn crop_arguments(settings: &ExportSettings, input: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-p".into(), settings.percent_retain.to_string().into()];

    if settings.margin_size > 0.0 {
        args.push("-a".into());
        args.push((-settings.margin_size).to_string().into());
    }
    if settings.uniform_crop {
        args.push("-u".into());
    }
    if settings.uniform_page_size {
        args.push("-s".into());
    }
    if settings.threshold != DEFAULT_THRESHOLD {
        args.push("-t".into());
        args.push(settings.threshold.to_string().into());
    }

    args.push(input.as_os_str().to_owned());
    args.push("-o".into());
    args.push(output.as_os_str().to_owned());
    args
}

/// Runs a configured command line, e.g. `pdf-crop-margins` or
/// `python -m pdfCropMargins`.
#[derive(Debug, Clone)]
pub struct CommandCropper {
    command: Vec<String>,
}

impl CommandCropper {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl MarginCropper for CommandCropper {
    fn crop(
        &self,
        settings: &ExportSettings,
        input: &Path,
        output: &Path,
    ) -> Result<(), CropError> {
        let (program, prefix) = self.command.split_first().ok_or(CropError::NotConfigured)?;
        let args = crop_arguments(settings, input, output);
        log::debug!("Running {program} {prefix:?} {args:?}");

        let out = Command::new(program)
            .args(prefix)
            .args(&args)
            .output()
            .map_err(|source| CropError::Launch {
                program: program.clone(),
                source,
            })?;

        if out.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&out.stderr);
        let detail = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&out.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        Err(CropError::Failed {
            program: program.clone(),
            status: out.status,
            detail,
        })
    }
}

/// Intermediate path the cropped file is written to.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(CROP_TEMP_SUFFIX);
    PathBuf::from(raw)
}

/// Crop `path` and replace it with the result.
///
/// On any failure the intermediate file is removed and `path` keeps the
/// uncropped export.
pub fn crop_in_place(
    cropper: &dyn MarginCropper,
    settings: &ExportSettings,
    path: &Path,
) -> Result<(), CropError> {
    let tmp = temp_path(path);
    discard(&tmp);

    let result = cropper
        .crop(settings, path, &tmp)
        .and_then(|()| {
            if tmp.is_file() {
                Ok(())
            } else {
                Err(CropError::MissingOutput { path: tmp.clone() })
            }
        })
        .and_then(|()| {
            fs::rename(&tmp, path).map_err(|source| CropError::Replace {
                path: path.to_path_buf(),
                source,
            })
        });

    if result.is_err() {
        discard(&tmp);
    }
    result
}

fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("Removed stale {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn default_settings_produce_minimal_arguments() {
        let args = crop_arguments(
            &ExportSettings::default(),
            Path::new("in.pdf"),
            Path::new("in.pdf.crop"),
        );
        assert_eq!(
            strings(&args),
            ["-p", "0", "-u", "-s", "in.pdf", "-o", "in.pdf.crop"]
        );
    }

    #[test]
    fn margin_and_threshold_are_forwarded_when_set() {
        let settings = ExportSettings {
            percent_retain: 10.0,
            margin_size: 3.5,
            uniform_crop: false,
            uniform_page_size: false,
            threshold: 200,
            ..ExportSettings::default()
        };
        let args = crop_arguments(&settings, Path::new("a.pdf"), Path::new("b.pdf"));
        assert_eq!(
            strings(&args),
            ["-p", "10", "-a", "-3.5", "-t", "200", "a.pdf", "-o", "b.pdf"]
        );
    }

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("/out/fig.pdf")),
            PathBuf::from("/out/fig.pdf.crop")
        );
    }

    /// Writes a marker file instead of cropping.
    struct FakeCropper {
        fail: bool,
        write_output: bool,
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
    }

    impl FakeCropper {
        fn new(fail: bool, write_output: bool) -> Self {
            Self {
                fail,
                write_output,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MarginCropper for FakeCropper {
        fn crop(
            &self,
            _settings: &ExportSettings,
            input: &Path,
            output: &Path,
        ) -> Result<(), CropError> {
            self.calls
                .borrow_mut()
                .push((input.to_path_buf(), output.to_path_buf()));
            if self.write_output {
                fs::write(output, b"cropped").expect("write fake output");
            }
            if self.fail {
                return Err(CropError::NotConfigured);
            }
            Ok(())
        }
    }

    #[test]
    fn successful_crop_replaces_original_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fig.pdf");
        fs::write(&target, b"raw").unwrap();

        let cropper = FakeCropper::new(false, true);
        crop_in_place(&cropper, &ExportSettings::default(), &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"cropped");
        assert!(!temp_path(&target).exists());
        assert_eq!(
            cropper.calls.borrow().as_slice(),
            [(target.clone(), temp_path(&target))]
        );
    }

    #[test]
    fn failed_crop_keeps_raw_export_and_removes_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fig.pdf");
        fs::write(&target, b"raw").unwrap();

        let cropper = FakeCropper::new(true, true);
        let err = crop_in_place(&cropper, &ExportSettings::default(), &target).unwrap_err();

        assert!(matches!(err, CropError::NotConfigured));
        assert_eq!(fs::read(&target).unwrap(), b"raw");
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn silent_crop_without_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fig.pdf");
        fs::write(&target, b"raw").unwrap();

        let cropper = FakeCropper::new(false, false);
        let err = crop_in_place(&cropper, &ExportSettings::default(), &target).unwrap_err();

        assert!(matches!(err, CropError::MissingOutput { .. }));
        assert_eq!(fs::read(&target).unwrap(), b"raw");
    }

    #[test]
    fn stale_temp_file_is_discarded_before_cropping() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fig.pdf");
        fs::write(&target, b"raw").unwrap();
        fs::write(temp_path(&target), b"leftover").unwrap();

        let cropper = FakeCropper::new(false, false);
        let err = crop_in_place(&cropper, &ExportSettings::default(), &target).unwrap_err();

        assert!(matches!(err, CropError::MissingOutput { .. }));
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn empty_command_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fig.pdf");
        let cropper = CommandCropper::new(Vec::new());
        let err = cropper
            .crop(&ExportSettings::default(), &target, &temp_path(&target))
            .unwrap_err();
        assert!(matches!(err, CropError::NotConfigured));
    }

    #[test]
    fn missing_program_reports_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fig.pdf");
        let cropper = CommandCropper::new(vec!["ppt2fig-no-such-cropper".to_string()]);
        let err = cropper
            .crop(&ExportSettings::default(), &target, &temp_path(&target))
            .unwrap_err();
        assert!(matches!(err, CropError::Launch { .. }));
    }

    /// Stand-in for the crop command: copies the input to the `-o` path.
    #[cfg(unix)]
    const COPY_SCRIPT: &str = r#"
while [ "$#" -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -p|-a|-t) shift 2 ;;
    -u|-s) shift ;;
    *) src="$1"; shift ;;
  esac
done
printf 'cropped:' > "$out"
cat "$src" >> "$out"
"#;

    #[cfg(unix)]
    #[test]
    fn command_cropper_runs_configured_command_line() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("crop.sh");
        fs::write(&script, COPY_SCRIPT).unwrap();
        let target = dir.path().join("fig.pdf");
        fs::write(&target, b"raw").unwrap();

        let settings = ExportSettings {
            margin_size: 3.0,
            threshold: 100,
            ..ExportSettings::default()
        };
        let cropper = CommandCropper::new(vec![
            "sh".to_string(),
            script.to_string_lossy().into_owned(),
        ]);
        crop_in_place(&cropper, &settings, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"cropped:raw");
        assert!(!temp_path(&target).exists());
    }

    #[cfg(unix)]
    #[test]
    fn command_cropper_surfaces_stderr_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("crop.sh");
        fs::write(&script, "echo 'bad pdf header' >&2\nexit 3\n").unwrap();
        let target = dir.path().join("fig.pdf");
        fs::write(&target, b"raw").unwrap();

        let cropper = CommandCropper::new(vec![
            "sh".to_string(),
            script.to_string_lossy().into_owned(),
        ]);
        let err = crop_in_place(&cropper, &ExportSettings::default(), &target).unwrap_err();

        match err {
            CropError::Failed { detail, .. } => assert_eq!(detail, "bad pdf header"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read(&target).unwrap(), b"raw");
    }
}
