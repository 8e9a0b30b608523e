use anyhow::{Result, Context, anyhow};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::subtitle_builder::SubtitleBuilder;
use crate::transcript::Transcription;

// @module: Application controller for transcript conversion

/// Main application controller for subtitle generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert a single transcript file and write the subtitle document
    /// next to it (or into `output_dir`).
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        if !FileManager::is_transcript_file(&input_file) {
            warn!("Input does not look like a transcript JSON file: {:?}", input_file);
        }

        FileManager::ensure_dir(&output_dir)?;

        if let Ok(language_name) = language_utils::get_language_name(&self.config.language) {
            debug!(
                "Transcript language: {} ({})",
                language_name, self.config.language
            );
        }

        // Parse the collaborator's verbose JSON output
        let content = FileManager::read_to_string(&input_file)?;
        let transcription = Transcription::from_json(&content)
            .with_context(|| format!("Failed to parse transcript file: {:?}", input_file))?;

        if let Some(reported) = &transcription.language {
            if !language_utils::language_codes_match(reported, &self.config.language) {
                warn!(
                    "Transcript reports language '{}' but configuration expects '{}'",
                    reported, self.config.language
                );
            }
        }

        let words = transcription.into_words()?;
        if words.is_empty() {
            warn!("Transcript contains no words; writing an empty subtitle document");
        }

        let source_filename = input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| String::from("subtitles"));

        let builder = SubtitleBuilder::new(self.config.clone());
        let output = builder.build(&words, &source_filename)?;

        let output_path = output_dir.join(&output.suggested_filename);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite)");
            return Ok(());
        }

        FileManager::write_to_file(&output_path, &output.content)?;

        info!(
            "Wrote {} in {}: {:?}",
            self.config.format.display_name(),
            Self::format_duration(start_time.elapsed()),
            output_path
        );

        Ok(())
    }

    /// Convert every transcript JSON file under a directory.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let transcript_files = FileManager::find_files(&input_dir, "json")?;

        if transcript_files.is_empty() {
            warn!("No transcript files found in directory: {:?}", input_dir);
            return Ok(());
        }

        let folder_pb = ProgressBar::new(transcript_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("=> "));

        let mut processed_count = 0;

        for path in &transcript_files {
            folder_pb.set_message(
                path.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let output_dir = path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf();

            if let Err(e) = self.run(path.clone(), output_dir, force_overwrite) {
                error!("Error processing file {:?}: {}", path, e);
            } else {
                processed_count += 1;
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!("Finished processing {} of {} files", processed_count, transcript_files.len());

        Ok(())
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        self.config.validate().is_ok()
    }

    /// Format an elapsed duration for log output
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m{:02}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{}.{:03}s", total_secs, duration.subsec_millis())
        }
    }
}
