use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};

use super::session_service::{PackSource, PendingUpload, SkinPackSession};
use crate::{
    commands::{
        exports::export_skin_pack,
        import::{import_skin_pack, ImportedPackSummary},
        skin_processor::render_skin_preview,
    },
    domain::skin::shape::ShapeVariant,
    infrastructure::filesystem::{config::CreatorConfig, paths::texture_member_name},
};

/// Build and inspect Minecraft Bedrock skin packs
#[derive(Debug, Parser)]
#[command(name = "skinpack")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Package skin textures into a skin pack archive
    Build(BuildArgs),

    /// List the skins inside a skin pack archive
    Inspect(InspectArgs),

    /// Render the front-view thumbnail of a skin texture
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Pack name shown in game
    #[arg(long)]
    pub name: String,

    /// Output folder (defaults to the configured one)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// `path=Display Name`, optionally suffixed with `:slim`
    #[arg(required = true)]
    pub skins: Vec<String>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    pub archive: PathBuf,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    pub texture: PathBuf,

    /// Use the slim arm model
    #[arg(long)]
    pub slim: bool,

    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinArg {
    pub path: PathBuf,
    pub display_name: String,
    pub shape: ShapeVariant,
}

/// Parses `path=Name[:slim|:standard|:broad]`. Without `=` the file stem
/// becomes the display name.
pub fn parse_skin_arg(raw: &str) -> Result<SkinArg, String> {
    let (path, label) = match raw.split_once('=') {
        Some((path, label)) => (path.trim(), Some(label.trim())),
        None => (raw.trim(), None),
    };
    if path.is_empty() {
        return Err(format!("Missing texture path in '{raw}'"));
    }
    let path = PathBuf::from(path);

    let (display_name, shape) = match label {
        Some(label) => split_shape_suffix(label),
        None => (
            path.file_stem()
                .and_then(|value| value.to_str())
                .unwrap_or_default()
                .to_string(),
            ShapeVariant::Standard,
        ),
    };

    Ok(SkinArg {
        path,
        display_name,
        shape,
    })
}

fn split_shape_suffix(label: &str) -> (String, ShapeVariant) {
    if let Some((name, suffix)) = label.rsplit_once(':') {
        match suffix.trim().to_ascii_lowercase().as_str() {
            "slim" => return (name.trim().to_string(), ShapeVariant::Slim),
            "standard" | "broad" => return (name.trim().to_string(), ShapeVariant::Standard),
            _ => {}
        }
    }
    (label.to_string(), ShapeVariant::Standard)
}

struct CliPackSource {
    name: String,
    skins: Vec<SkinArg>,
    /// Index into `skins` for each upload handed out, in order.
    submitted: Vec<usize>,
}

impl PackSource for CliPackSource {
    fn pending_uploads(&mut self) -> Vec<PendingUpload> {
        let mut uploads = Vec::new();
        self.submitted.clear();
        for (index, skin) in self.skins.iter().enumerate() {
            let Some(file_name) = texture_member_name(&skin.path) else {
                log::error!("Not a file path: {}", skin.path.display());
                continue;
            };
            match fs::read(&skin.path) {
                Ok(bytes) => {
                    uploads.push(PendingUpload { file_name, bytes });
                    self.submitted.push(index);
                }
                Err(err) => log::error!("Could not read {}: {err}", skin.path.display()),
            }
        }
        uploads
    }

    fn pack_name(&self) -> String {
        self.name.trim().to_string()
    }
}

pub async fn execute(cli: Cli, config: CreatorConfig) -> Result<(), String> {
    match cli.command {
        Command::Build(args) => build(args, &config).await,
        Command::Inspect(args) => inspect(args, &config).await,
        Command::Preview(args) => preview(args),
    }
}

async fn build(args: BuildArgs, config: &CreatorConfig) -> Result<(), String> {
    let skins = args
        .skins
        .iter()
        .map(|raw| parse_skin_arg(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let mut source = CliPackSource {
        name: args.name,
        skins,
        submitted: Vec::new(),
    };

    let mut session = SkinPackSession::default();
    let outcomes = session.sync_from(&mut source);
    for (outcome, skin_index) in outcomes.into_iter().zip(source.submitted.iter().copied()) {
        let index = match (outcome.result, outcome.position) {
            (Ok(grid), Some(index)) => {
                log::info!("Added {} ({grid:?})", outcome.file_name);
                index
            }
            (Ok(_), None) => continue,
            (Err(err), _) => {
                eprintln!("Skipped {}: {err}", outcome.file_name);
                continue;
            }
        };
        let skin = &source.skins[skin_index];
        session
            .set_display_name(index, skin.display_name.clone())
            .map_err(|err| err.to_string())?;
        session
            .set_shape_variant(index, skin.shape)
            .map_err(|err| err.to_string())?;
    }

    let output_dir = args.output.unwrap_or_else(|| config.output_dir());
    let result = export_skin_pack(session.into_pack(), &output_dir, config).await?;
    println!(
        "Wrote {} ({} skins, {} bytes)",
        result.output_path, result.skin_count, result.size_bytes
    );
    Ok(())
}

async fn inspect(args: InspectArgs, config: &CreatorConfig) -> Result<(), String> {
    let pack = import_skin_pack(&args.archive, config).await?;
    let summary = ImportedPackSummary::from(&pack);

    if args.json {
        let raw = serde_json::to_string_pretty(&summary)
            .map_err(|err| format!("Could not serialize listing: {err}"))?;
        println!("{raw}");
        return Ok(());
    }

    println!("{}", summary.pack_name);
    for (index, skin) in summary.skins.iter().enumerate() {
        println!(
            "  {}. {} [{}] {} ({} bytes)",
            index + 1,
            skin.display_name,
            skin.shape,
            skin.texture_name,
            skin.size_bytes
        );
    }
    Ok(())
}

fn preview(args: PreviewArgs) -> Result<(), String> {
    let bytes = fs::read(&args.texture)
        .map_err(|err| format!("Could not read {}: {err}", args.texture.display()))?;
    let shape = if args.slim {
        ShapeVariant::Slim
    } else {
        ShapeVariant::Standard
    };

    let png = render_skin_preview(bytes, shape)?;
    write_file(&args.output, &png)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Could not create {}: {err}", parent.display()))?;
    }
    fs::write(path, bytes).map_err(|err| format!("Could not write {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{execute, parse_skin_arg, Cli, Command};
    use crate::{
        commands::import::import_skin_pack,
        domain::skin::shape::ShapeVariant,
        infrastructure::filesystem::config::CreatorConfig,
        services::texture::test_support::png_of_size,
    };

    #[test]
    fn skin_args_carry_name_and_shape() {
        let arg = parse_skin_arg("skins/zed.png=Zed the Great:slim").unwrap();
        assert_eq!(arg.path, PathBuf::from("skins/zed.png"));
        assert_eq!(arg.display_name, "Zed the Great");
        assert_eq!(arg.shape, ShapeVariant::Slim);

        let arg = parse_skin_arg("ann.png=Ann: Reborn").unwrap();
        assert_eq!(arg.display_name, "Ann: Reborn");
        assert_eq!(arg.shape, ShapeVariant::Standard);

        let arg = parse_skin_arg("bo.png").unwrap();
        assert_eq!(arg.display_name, "bo");

        assert!(parse_skin_arg("=Nobody").is_err());
    }

    #[test]
    fn cli_parses_build_command() {
        let cli = Cli::try_parse_from([
            "skinpack", "build", "--name", "Heroes", "--output", "out", "zed.png=Zed",
        ])
        .unwrap();

        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.name, "Heroes");
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.skins, vec!["zed.png=Zed".to_string()]);
    }

    #[tokio::test]
    async fn build_skips_invalid_textures_and_writes_pack() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("zed.png");
        let bad = dir.path().join("bad.png");
        std::fs::write(&good, png_of_size(64, 64)).unwrap();
        std::fs::write(&bad, png_of_size(20, 20)).unwrap();
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from([
            "skinpack".to_string(),
            "build".to_string(),
            "--name".to_string(),
            "Heroes".to_string(),
            "--output".to_string(),
            out.display().to_string(),
            format!("{}=Zed:slim", good.display()),
            format!("{}=Bad", bad.display()),
        ])
        .unwrap();
        execute(cli, CreatorConfig::default()).await.unwrap();

        let pack = import_skin_pack(&out.join("Heroes.mcpack"), &CreatorConfig::default())
            .await
            .unwrap();
        assert_eq!(pack.len(), 1);
        assert_eq!(pack.entries()[0].display_name(), "Zed");
        assert_eq!(pack.entries()[0].shape_variant(), ShapeVariant::Slim);
    }

    #[tokio::test]
    async fn rejected_same_named_texture_keeps_first_details() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a/zed.png");
        let second = dir.path().join("b/zed.png");
        for path in [&first, &second] {
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, png_of_size(64, 64)).unwrap();
        }
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from([
            "skinpack".to_string(),
            "build".to_string(),
            "--name".to_string(),
            "Heroes".to_string(),
            "--output".to_string(),
            out.display().to_string(),
            format!("{}=Zed", first.display()),
            format!("{}=Impostor:slim", second.display()),
        ])
        .unwrap();
        execute(cli, CreatorConfig::default()).await.unwrap();

        let pack = import_skin_pack(&out.join("Heroes.mcpack"), &CreatorConfig::default())
            .await
            .unwrap();
        assert_eq!(pack.len(), 1);
        assert_eq!(pack.entries()[0].display_name(), "Zed");
        assert_eq!(pack.entries()[0].shape_variant(), ShapeVariant::Standard);
    }
}
