use ahash::{AHashSet, AHasher};
use clap::{Parser, Subcommand};
use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::hash::Hasher;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// trove - Forum archive toolkit: canonicalize search terms, merge post
/// shards, prune duplicate media
#[derive(Parser)]
#[command(name = "trove")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".trove.toml")]
    config: PathBuf,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a search-term list by dropping punctuation-extended supersets
    Terms {
        /// Input term file, one term per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output term file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Merge post shards into a single archive, dropping duplicate ids
    Merge {
        /// Directory containing shard files
        #[arg(short, long, default_value = "./search-results")]
        input: PathBuf,

        /// Merged archive path
        #[arg(short, long, default_value = "./archive.json")]
        output: PathBuf,
    },

    /// Remove numeric-suffix duplicates from media folders
    Prune {
        /// Root directory containing media folders
        path: PathBuf,

        /// Plan deletions without applying them
        #[arg(long)]
        dry_run: bool,

        /// Only delete when file content matches the canonical file
        #[arg(long)]
        verify: bool,

        /// Glob patterns to exempt from pruning (can be repeated)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Consolidate media files from nested folders into one tree
    Collect {
        /// Input directory to sweep
        input: PathBuf,

        /// Destination directory
        output: PathBuf,
    },

    /// Show archive statistics
    Stats {
        /// Merged archive path
        #[arg(default_value = "./archive.json")]
        archive: PathBuf,

        /// Show top N authors
        #[arg(long, default_value = "10")]
        top_authors: usize,
    },
}

// Configuration

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    media: MediaConfig,
    merge: MergeConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MediaConfig {
    /// Folder names (case-insensitive) whose contents are treated as media
    folders: Vec<String>,
    /// File extensions eligible for pruning
    extensions: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            folders: vec!["images".to_string(), "videos".to_string()],
            extensions: ["jpg", "jpeg", "png", "gif", "mp4", "mov", "avi"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MergeConfig {
    /// Extensions of shard files holding JSON post arrays
    shard_extensions: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            shard_extensions: vec!["txt".to_string(), "json".to_string()],
        }
    }
}

impl Config {
    fn normalize(&mut self) {
        for folder in &mut self.media.folders {
            *folder = folder.to_lowercase();
        }
        for ext in &mut self.media.extensions {
            *ext = ext.trim_start_matches('.').to_lowercase();
        }
        for ext in &mut self.merge.shard_extensions {
            *ext = ext.trim_start_matches('.').to_lowercase();
        }
    }
}

fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
    config.normalize();
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Terms { input, output } => cmd_terms(&input, &output, cli.quiet),
        Commands::Merge { input, output } => cmd_merge(&input, &output, &config, cli.quiet),
        Commands::Prune { path, dry_run, verify, exclude } => {
            cmd_prune(&path, dry_run, verify, &exclude, &config, cli.quiet)
        }
        Commands::Collect { input, output } => cmd_collect(&input, &output, &config, cli.quiet),
        Commands::Stats { archive, top_authors } => cmd_stats(&archive, top_authors),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Term canonicalization
// ============================================================================

fn cmd_terms(input: &Path, output: &Path, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;

    // Trim, drop blanks, collapse exact repeats before the superset pass
    let unique: BTreeSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    let total = unique.len();

    let kept = canonicalize_terms(unique.into_iter().collect());

    let mut out = String::new();
    for term in &kept {
        out.push_str(term);
        out.push('\n');
    }
    fs::write(output, out).map_err(|e| format!("cannot write {}: {}", output.display(), e))?;

    if !quiet {
        println!("{}", "Term Canonicalization".green().bold());
        println!("  Terms read:       {}", total.to_string().cyan());
        println!("  Terms kept:       {}", kept.len().to_string().cyan());
        println!("  Supersets culled: {}", (total - kept.len()).to_string().cyan());
        println!();
        println!("{} {}", "Terms written to".green(), output.display().to_string().cyan());
    }

    Ok(())
}

/// Reduce a set of unique terms to the minimal set with no punctuation-extended
/// supersets. A longer term is redundant when it starts with an already-kept
/// term and the character right after that prefix is not alphanumeric; genuine
/// word continuations (alphanumeric boundary) survive.
fn canonicalize_terms(mut terms: Vec<String>) -> Vec<String> {
    // Shortest first so prefixes are accepted before their extensions; the
    // lexicographic tie-break makes the pass independent of input order.
    terms.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut kept: Vec<String> = Vec::new();
    for term in terms {
        let redundant = kept.iter().any(|k| is_punctuation_extension(&term, k));
        if !redundant {
            kept.push(term);
        }
    }

    kept.sort();
    kept
}

/// True when `term` merely appends a delimiter/punctuation tail to `prefix`.
fn is_punctuation_extension(term: &str, prefix: &str) -> bool {
    if term.len() <= prefix.len() || !term.starts_with(prefix) {
        return false;
    }
    match term[prefix.len()..].chars().next() {
        Some(boundary) => !boundary.is_alphanumeric(),
        None => false,
    }
}

// ============================================================================
// Shard merging
// ============================================================================

#[derive(Debug, Default)]
struct MergeStats {
    files_processed: usize,
    total_posts: usize,
    duplicate_posts: usize,
    malformed_posts: usize,
}

fn cmd_merge(
    input: &Path,
    output: &Path,
    config: &Config,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("input directory not found: {}", input.display()).into());
    }

    let start = Instant::now();

    if !quiet {
        println!("{} {}", "Merging shards from".cyan().bold(), input.display());
    }

    let shard_paths = collect_shards(input, &config.merge.shard_extensions);

    let mut stats = MergeStats::default();
    let mut shards: Vec<Vec<Value>> = Vec::new();

    for path in &shard_paths {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}: skipping {}: {}", "warning".yellow().bold(), path.display(), e);
                continue;
            }
        };
        let records: Vec<Value> = match serde_json::from_str(&content) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{}: skipping {}: {}", "warning".yellow().bold(), path.display(), e);
                continue;
            }
        };
        stats.files_processed += 1;
        shards.push(records);
    }

    let merged = merge_records(shards, &mut stats);

    fs::write(output, serde_json::to_string_pretty(&merged)?)
        .map_err(|e| format!("cannot write {}: {}", output.display(), e))?;

    let elapsed = start.elapsed();

    if !quiet {
        println!();
        println!("{}", "Merge Statistics".green().bold());
        println!("  Files processed:  {}", stats.files_processed.to_string().cyan());
        println!("  Posts seen:       {}", stats.total_posts.to_string().cyan());
        println!("  Duplicates:       {}", stats.duplicate_posts.to_string().cyan());
        if stats.malformed_posts > 0 {
            println!("  Missing ids:      {}", stats.malformed_posts.to_string().yellow());
        }
        println!("  Unique posts:     {}", merged.len().to_string().cyan());
        println!("  Time elapsed:     {:.2?}", elapsed);
        println!();
        println!("{} {}", "Archive written to".green(), output.display().to_string().cyan());
    }

    Ok(())
}

/// Enumerate shard files under `dir` and return them sorted lexicographically
/// by path, so the merge order never depends on OS traversal order.
fn collect_shards(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(dir);
    builder.hidden(true).git_ignore(false).git_global(false).git_exclude(false);

    let mut paths = Vec::new();
    for entry in builder.build().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if extensions.iter().any(|x| *x == ext) {
            paths.push(path.to_path_buf());
        }
    }

    paths.sort();
    paths
}

/// Merge shards already loaded in processing order; the first record seen for
/// each id wins and later copies are discarded without content inspection.
/// Records without a string `id` are skipped with a warning.
fn merge_records(shards: Vec<Vec<Value>>, stats: &mut MergeStats) -> Vec<Value> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut merged: Vec<Value> = Vec::new();

    for records in shards {
        for record in records {
            let id = match record.get("id").and_then(|v| v.as_str()) {
                Some(id) => id.to_string(),
                None => {
                    stats.malformed_posts += 1;
                    eprintln!("{}: skipping record without id", "warning".yellow().bold());
                    continue;
                }
            };
            stats.total_posts += 1;
            if seen.insert(id) {
                merged.push(record);
            } else {
                stats.duplicate_posts += 1;
            }
        }
    }

    merged
}

// ============================================================================
// Media pruning
// ============================================================================

/// Matches a base segment, one or more `_<digits>` groups, and an optional
/// trailing extension: `image_1.jpg`, `image_1_2.jpg`, `photo.jpg_1`, ...
const DUPLICATE_PATTERN: &str = r"^(.*?)((?:_\d+)+)(\.[A-Za-z0-9]+)?$";

#[derive(Debug)]
struct DuplicateName {
    base: String,
    suffix_run: String,
    extension: Option<String>,
}

#[derive(Debug)]
struct PlannedDeletion {
    duplicate: PathBuf,
    canonical: PathBuf,
}

fn cmd_prune(
    root: &Path,
    dry_run: bool,
    verify: bool,
    exclude: &[String],
    config: &Config,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !root.is_dir() {
        return Err(format!("not a directory: {}", root.display()).into());
    }

    let excludes = build_globset(exclude)?;
    let start = Instant::now();

    if !quiet {
        println!("{} {}", "Scanning".cyan().bold(), root.display());
    }

    let plan = plan_deletions(root, &config.media, &excludes, verify, quiet);

    if plan.is_empty() {
        if !quiet {
            println!("{}", "No duplicates found.".green());
        }
        return Ok(());
    }

    if dry_run {
        for planned in &plan {
            println!(
                "{} {} ({} {})",
                "would remove".yellow(),
                planned.duplicate.display(),
                "canonical:".dimmed(),
                planned.canonical.display()
            );
        }
        if !quiet {
            println!();
            println!(
                "{} {} deletions planned, nothing applied",
                "Dry run:".yellow().bold(),
                plan.len().to_string().cyan()
            );
        }
        return Ok(());
    }

    let (removed, skipped) = apply_deletions(&plan);

    let elapsed = start.elapsed();

    if !quiet {
        println!();
        println!("{}", "Prune Statistics".green().bold());
        println!("  Deletions planned: {}", plan.len().to_string().cyan());
        println!("  Files removed:     {}", removed.to_string().cyan());
        if skipped > 0 {
            println!("  Skipped:           {}", skipped.to_string().yellow());
        }
        println!("  Time elapsed:      {:.2?}", elapsed);
    }

    Ok(())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, Box<dyn std::error::Error>> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| format!("invalid exclude pattern '{}': {}", pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Phase one: walk the tree in sorted order and decide which files to delete,
/// without touching anything. Only files inside media-named folders are
/// classified; the decision for each file uses a snapshot of its directory.
fn plan_deletions(
    root: &Path,
    media: &MediaConfig,
    excludes: &GlobSet,
    verify: bool,
    quiet: bool,
) -> Vec<PlannedDeletion> {
    let mut plan = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("{}: {}", "warning".yellow().bold(), e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir_name = entry.file_name().to_string_lossy().to_lowercase();
        if !media.folders.iter().any(|f| *f == dir_name) {
            continue;
        }
        if let Err(e) = plan_directory(entry.path(), media, excludes, verify, quiet, &mut plan) {
            eprintln!(
                "{}: cannot scan {}: {}",
                "warning".yellow().bold(),
                entry.path().display(),
                e
            );
        }
    }

    plan
}

fn plan_directory(
    dir: &Path,
    media: &MediaConfig,
    excludes: &GlobSet,
    verify: bool,
    quiet: bool,
    plan: &mut Vec<PlannedDeletion>,
) -> Result<(), std::io::Error> {
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();

    let existing: HashSet<&str> = names.iter().map(|s| s.as_str()).collect();

    for name in &names {
        let path = dir.join(name);
        if excludes.is_match(&path) {
            continue;
        }
        let dup = match parse_duplicate_name(name) {
            Some(d) => d,
            None => continue,
        };
        let ext = match effective_extension(&dup) {
            Some(e) => e,
            None => continue,
        };
        if !media.extensions.iter().any(|x| *x == ext) {
            continue;
        }

        // First existing, distinct candidate decides; the rest are ignored.
        for candidate in canonical_candidates(&dup) {
            if candidate == *name || !existing.contains(candidate.as_str()) {
                continue;
            }
            let canonical = dir.join(&candidate);
            if verify {
                match files_identical(&path, &canonical) {
                    Ok(true) => {}
                    Ok(false) => {
                        if !quiet {
                            println!(
                                "{} {} differs from {}, keeping",
                                "note:".yellow(),
                                path.display(),
                                canonical.display()
                            );
                        }
                        break;
                    }
                    Err(e) => {
                        eprintln!(
                            "{}: cannot compare {}: {}",
                            "warning".yellow().bold(),
                            path.display(),
                            e
                        );
                        break;
                    }
                }
            }
            plan.push(PlannedDeletion { duplicate: path.clone(), canonical });
            break;
        }
    }

    Ok(())
}

/// Phase two: apply a deletion plan. The canonical file is re-checked right
/// before each removal; if it vanished since planning, the duplicate is kept.
fn apply_deletions(plan: &[PlannedDeletion]) -> (usize, usize) {
    let mut removed = 0;
    let mut skipped = 0;

    for planned in plan {
        if !planned.canonical.is_file() {
            eprintln!(
                "{}: canonical {} no longer present, keeping {}",
                "warning".yellow().bold(),
                planned.canonical.display(),
                planned.duplicate.display()
            );
            skipped += 1;
            continue;
        }
        match fs::remove_file(&planned.duplicate) {
            Ok(()) => {
                println!(
                    "{} {} ({} {})",
                    "Removed".green(),
                    planned.duplicate.display(),
                    "canonical:".dimmed(),
                    planned.canonical.display()
                );
                removed += 1;
            }
            Err(e) => {
                eprintln!(
                    "{}: cannot remove {}: {}",
                    "warning".yellow().bold(),
                    planned.duplicate.display(),
                    e
                );
                skipped += 1;
            }
        }
    }

    (removed, skipped)
}

fn parse_duplicate_name(name: &str) -> Option<DuplicateName> {
    let re = Regex::new(DUPLICATE_PATTERN).unwrap();
    let caps = re.captures(name)?;

    Some(DuplicateName {
        base: caps.get(1).map(|m| m.as_str().to_string())?,
        suffix_run: caps.get(2).map(|m| m.as_str().to_string())?,
        extension: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

/// Candidate canonical names for a suffixed file, in priority order:
/// all suffix groups stripped; the base alone when the suffix run was appended
/// after a complete `name.ext`; only the last suffix group stripped.
fn canonical_candidates(dup: &DuplicateName) -> Vec<String> {
    let ext = dup.extension.as_deref().unwrap_or("");
    let mut candidates: Vec<String> = Vec::new();

    candidates.push(format!("{}{}", dup.base, ext));

    if dup.base.contains('.') && !candidates.contains(&dup.base) {
        candidates.push(dup.base.clone());
    }

    // suffix_run always starts with '_', so rfind cannot fail
    let last_group = dup.suffix_run.rfind('_').unwrap_or(0);
    let single_strip = format!("{}{}{}", dup.base, &dup.suffix_run[..last_group], ext);
    if !candidates.contains(&single_strip) {
        candidates.push(single_strip);
    }

    candidates
}

/// Extension used for the media filter: the trailing extension group when
/// present, otherwise the extension embedded in the base (`photo.jpg_1`).
fn effective_extension(dup: &DuplicateName) -> Option<String> {
    if let Some(ext) = &dup.extension {
        return Some(ext.trim_start_matches('.').to_lowercase());
    }
    dup.base.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Content check behind --verify: length first, then a chunked hash of each
/// file. Name-only pruning stays the default.
fn files_identical(a: &Path, b: &Path) -> Result<bool, std::io::Error> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(file_digest(a)? == file_digest(b)?)
}

fn file_digest(path: &Path) -> Result<u64, std::io::Error> {
    let mut file = fs::File::open(path)?;
    let mut hasher = AHasher::default();
    let mut buf = [0u8; 64 * 1024];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.write(&buf[..n]);
    }

    Ok(hasher.finish())
}

// ============================================================================
// Media collection
// ============================================================================

fn cmd_collect(
    input: &Path,
    output: &Path,
    config: &Config,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("input directory not found: {}", input.display()).into());
    }

    for folder in &config.media.folders {
        fs::create_dir_all(output.join(folder))?;
    }

    let mut moved: BTreeMap<String, usize> = config
        .media
        .folders
        .iter()
        .map(|f| (f.clone(), 0))
        .collect();

    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("{}: {}", "warning".yellow().bold(), e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        // Never sweep files already consolidated into the destination
        if entry.path().starts_with(output) {
            continue;
        }
        let dir_name = entry.file_name().to_string_lossy().to_lowercase();
        if !config.media.folders.iter().any(|f| *f == dir_name) {
            continue;
        }

        let mut names: Vec<String> = Vec::new();
        match fs::read_dir(entry.path()) {
            Ok(read) => {
                for file in read.filter_map(|f| f.ok()) {
                    if file.file_type().map(|t| t.is_file()).unwrap_or(false) {
                        names.push(file.file_name().to_string_lossy().to_string());
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "{}: cannot read {}: {}",
                    "warning".yellow().bold(),
                    entry.path().display(),
                    e
                );
                continue;
            }
        }
        names.sort();

        let dest_dir = output.join(&dir_name);
        for name in names {
            let src = entry.path().join(&name);
            let dest = next_free_path(&dest_dir, &name);
            match fs::rename(&src, &dest) {
                Ok(()) => {
                    if let Some(count) = moved.get_mut(&dir_name) {
                        *count += 1;
                    }
                }
                Err(e) => {
                    eprintln!(
                        "{}: cannot move {}: {}",
                        "warning".yellow().bold(),
                        src.display(),
                        e
                    );
                }
            }
        }
    }

    if !quiet {
        println!("{}", "Collect Statistics".green().bold());
        for (folder, count) in &moved {
            println!("  {:<10} {}", format!("{}:", folder), count.to_string().cyan());
        }
        println!();
        println!("{} {}", "Media moved to".green(), output.display().to_string().cyan());
    }

    Ok(())
}

/// First free destination for `name` in `dir`, disambiguating collisions with
/// `_<n>` suffixes on the stem. These are the names `prune` later recognizes.
fn next_free_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((s, e)) => (s.to_string(), format!(".{}", e)),
        None => (name.to_string(), String::new()),
    };

    let mut n = 1;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, n, ext));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

// ============================================================================
// Archive statistics
// ============================================================================

fn cmd_stats(archive: &Path, top_authors: usize) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(archive)
        .map_err(|_| format!("archive not found: {}. Run 'trove merge' first.", archive.display()))?;
    let posts: Vec<Value> = serde_json::from_str(&content)?;

    let mut comment_count = 0;
    let mut author_counts: HashMap<String, usize> = HashMap::new();

    for post in &posts {
        if let Some(comments) = post.get("comments").and_then(|c| c.as_array()) {
            comment_count += comments.len();
        }
        if let Some(author) = post.get("author").and_then(|a| a.as_str()) {
            *author_counts.entry(author.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = author_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("{}", "Archive Statistics".green().bold());
    println!();
    println!("  Posts:            {}", posts.len().to_string().cyan());
    println!("  Comments:         {}", comment_count.to_string().cyan());
    println!("  Distinct authors: {}", ranked.len().to_string().cyan());
    println!();
    println!("{}", format!("Top {} Authors", top_authors).green().bold());
    println!();

    for (author, count) in ranked.iter().take(top_authors) {
        let bar = "=".repeat((*count).min(40));
        println!("  {:>20} {:>4} {}", author.cyan(), count, bar.dimmed());
    }

    Ok(())
}
