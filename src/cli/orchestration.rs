//! Main workflow orchestration logic
//!
//! Gathers the inputs of a pseudo-version (HEAD revision, commit time, base
//! tag, major prefix) from a repository and the configuration, then renders
//! the version. Kept apart from main.rs so it can be driven programmatically
//! and against a mock repository.

use chrono::{DateTime, Utc};
use tracing::{debug, info_span};

use crate::boundary::BoundaryWarning;
use crate::config::{load_config, validate_major, Config};
use crate::domain::{classify, pseudo_version, shorten_sha1};
use crate::error::Result;
use crate::git::{latest_semver_tag, Git2Repository, Repository};

/// Arguments for the pseudo-version workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PseudoVersionArgs {
    /// Directory inside the repository
    pub dir: String,

    /// Path to custom config file
    pub config_path: Option<String>,

    /// Major version prefix, overrides the config
    pub major: Option<String>,

    /// Base tag to use instead of searching the history
    pub tag: Option<String>,

    /// Treat the revision as untagged
    pub no_tags: bool,
}

/// Everything needed to synthesize a pseudo-version
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoVersionInputs {
    /// Major prefix, empty for the default
    pub major: String,
    /// Preceding version, empty when there is none
    pub older: String,
    /// Commit time of the revision
    pub time: DateTime<Utc>,
    /// Shortened revision identifier
    pub revision: String,
    /// Name of the base tag, if one was used
    pub base_tag: Option<String>,
    /// Non-fatal issues met while gathering inputs
    pub warnings: Vec<BoundaryWarning>,
}

impl PseudoVersionInputs {
    /// Synthesize the pseudo-version
    pub fn render(&self) -> String {
        pseudo_version(&self.major, &self.older, &self.time, &self.revision)
    }
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The synthesized pseudo-version
    pub pseudo_version: String,

    /// The tag the version was based on
    pub base_tag: Option<String>,

    /// Non-fatal issues to report
    pub warnings: Vec<BoundaryWarning>,
}

/// Collects the pseudo-version inputs from `repo`.
///
/// Major prefix: `args.major`, then `config.major`, then the default.
/// Base version: `args.tag` verbatim, then the nearest semver tag reachable
/// from HEAD, unless tags are disabled by `args.no_tags` or the config.
pub fn resolve_inputs<R: Repository + ?Sized>(
    repo: &R,
    args: &PseudoVersionArgs,
    config: &Config,
) -> Result<PseudoVersionInputs> {
    let major = match args.major.as_deref().or(config.major.as_deref()) {
        Some(major) => {
            validate_major(major)?;
            major.to_string()
        }
        None => String::new(),
    };

    let head = repo.head_commit()?;
    debug!(hash = %head.hash, time = %head.time, "resolved HEAD");

    let mut warnings = Vec::new();
    let (older, base_tag) = if let Some(tag) = &args.tag {
        let valid = classify(tag).is_valid();
        if !valid {
            warnings.push(BoundaryWarning::UnparsableTag {
                tag: tag.clone(),
                reason: "not a semantic version, treating the revision as untagged".to_string(),
            });
        }
        (tag.clone(), valid.then(|| tag.clone()))
    } else if args.no_tags || !config.tags.enabled {
        debug!("tag discovery disabled");
        (String::new(), None)
    } else {
        let pattern = config.tag_pattern()?;
        let search = latest_semver_tag(repo, &pattern, &head.hash)?;
        warnings.extend(search.warnings);
        match search.found {
            Some(found) => (found.version, Some(found.name)),
            None => (String::new(), None),
        }
    };

    for warning in &warnings {
        debug!(%warning, "boundary warning");
    }

    Ok(PseudoVersionInputs {
        major,
        older,
        time: head.time,
        revision: shorten_sha1(&head.hash).to_string(),
        base_tag,
        warnings,
    })
}

/// Resolves the inputs from `repo` and renders the pseudo-version
pub fn run<R: Repository + ?Sized>(
    repo: &R,
    args: &PseudoVersionArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let inputs = resolve_inputs(repo, args, config)?;
    let pseudo_version = inputs.render();
    debug!(%pseudo_version, "synthesized pseudo-version");

    Ok(WorkflowResult {
        pseudo_version,
        base_tag: inputs.base_tag,
        warnings: inputs.warnings,
    })
}

/// Main pseudo-version workflow
///
/// 1. Load configuration
/// 2. Open the git repository containing `args.dir`
/// 3. Resolve HEAD, its commit time and base tag
/// 4. Render the pseudo-version
pub fn run_pseudo_version_workflow(args: &PseudoVersionArgs) -> Result<WorkflowResult> {
    let _span = info_span!("pseudo_version", dir = %args.dir).entered();

    let config = load_config(args.config_path.as_deref())?;
    let repo = Git2Repository::open(&args.dir)?;
    run(&repo, args, &config)
}
