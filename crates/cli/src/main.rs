use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::dto::{DiagnosisReport, DiseaseDto, MedicineDto, SymptomDto};
use carecheck_core::config::catalog_path_from_env_value;
use carecheck_core::constants::{CATALOG_PATH_ENV, DEFAULT_LANGUAGE, DEFAULT_REST_ADDR};
use carecheck_core::{
    CoreConfig, DiagnosisEngine, DiagnosisQuery, Disease, KnowledgeBase, Medicine, Symptom,
};

#[derive(Parser)]
#[command(name = "carecheck")]
#[command(about = "CareCheck symptom checker and medicine lookup")]
struct Cli {
    /// Catalog YAML to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank possible conditions for reported symptoms
    Diagnose {
        /// Reported symptoms, e.g. "runny nose" sneezing
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Patient age in years
        #[arg(long)]
        age: Option<u32>,
        /// Patient gender
        #[arg(long)]
        gender: Option<String>,
    },
    /// List or search symptoms
    Symptoms {
        #[arg(long)]
        search: Option<String>,
    },
    /// List or search diseases
    Diseases {
        #[arg(long)]
        search: Option<String>,
    },
    /// List, search or look up medicines
    Medicines {
        #[arg(long, conflicts_with_all = ["category", "id"])]
        search: Option<String>,
        /// Exact category, ignoring case
        #[arg(long, conflicts_with = "id")]
        category: Option<String>,
        #[arg(long)]
        id: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carecheck=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use 'carecheck --help' for commands");
        return Ok(());
    };

    let cfg = resolve_config(cli.catalog, std::env::var(CATALOG_PATH_ENV).ok())?;
    let kb = cfg.load_knowledge_base()?;
    tracing::debug!(
        diseases = kb.diseases().len(),
        medicines = kb.medicines().len(),
        "catalog loaded"
    );

    print!("{}", run(&kb, command, cli.json)?);
    Ok(())
}

/// `--catalog` wins over `CARECHECK_CATALOG`; with neither, the built-in catalog is used.
fn resolve_config(
    flag: Option<PathBuf>,
    env_value: Option<String>,
) -> anyhow::Result<CoreConfig> {
    let catalog_path = match flag {
        Some(path) => Some(path),
        None => catalog_path_from_env_value(env_value)?,
    };
    Ok(CoreConfig::new(
        catalog_path,
        DEFAULT_REST_ADDR.into(),
        DEFAULT_LANGUAGE.into(),
    )?)
}

/// Execute one command against the catalog and return what should be printed.
fn run(kb: &KnowledgeBase, command: Commands, json: bool) -> anyhow::Result<String> {
    match command {
        Commands::Diagnose {
            symptoms,
            age,
            gender,
        } => {
            let query = DiagnosisQuery {
                symptoms,
                age,
                gender,
            };
            let result = DiagnosisEngine::new(kb).diagnose(&query);
            let report = DiagnosisReport::new(&query, &result);
            if json {
                to_json(&report)
            } else {
                Ok(render_report(&report))
            }
        }
        Commands::Symptoms { search } => {
            let symptoms: Vec<&Symptom> = match search {
                Some(q) => kb.search_symptoms(&q),
                None => kb.symptoms().iter().collect(),
            };
            if json {
                to_json(&symptoms.into_iter().map(SymptomDto::from).collect::<Vec<_>>())
            } else {
                Ok(render_list(
                    symptoms
                        .iter()
                        .map(|s| (s.id.as_str(), s.name.as_str(), s.category.as_str())),
                ))
            }
        }
        Commands::Diseases { search } => {
            let diseases: Vec<&Disease> = match search {
                Some(q) => kb.search_diseases(&q),
                None => kb.diseases().iter().collect(),
            };
            if json {
                to_json(&diseases.into_iter().map(DiseaseDto::from).collect::<Vec<_>>())
            } else {
                Ok(render_list(
                    diseases
                        .iter()
                        .map(|d| (d.id.as_str(), d.name.as_str(), d.category.as_str())),
                ))
            }
        }
        Commands::Medicines {
            search,
            category,
            id,
        } => {
            let medicines: Vec<&Medicine> = if let Some(id) = id {
                match kb.medicine_by_id(&id) {
                    Some(m) => vec![m],
                    None => anyhow::bail!("Medicine not found: {id}"),
                }
            } else if let Some(category) = category {
                kb.medicines_by_category(&category)
            } else if let Some(q) = search {
                kb.search_medicines(q.trim())
            } else {
                kb.medicines().iter().collect()
            };
            if json {
                to_json(&medicines.into_iter().map(MedicineDto::from).collect::<Vec<_>>())
            } else {
                Ok(render_list(medicines.iter().map(|m| {
                    (m.id.as_str(), m.name.as_str(), m.category.as_str())
                })))
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

fn render_list<'a>(rows: impl Iterator<Item = (&'a str, &'a str, &'a str)>) -> String {
    let mut out = String::new();
    for (id, name, category) in rows {
        out.push_str(&format!("{id}\t{name} ({category})\n"));
    }
    if out.is_empty() {
        out.push_str("No results found.\n");
    }
    out
}

fn render_report(report: &DiagnosisReport) -> String {
    let mut out = format!("Urgency: {}\n", report.urgency);

    if report.possible_conditions.is_empty() {
        out.push_str("No matching conditions.\n");
    } else {
        out.push_str("Possible conditions:\n");
        for c in &report.possible_conditions {
            out.push_str(&format!(
                "  {:>3}%  {}  [{}]\n",
                c.probability,
                c.disease.name,
                c.matching_symptoms.join(", ")
            ));
        }
    }

    out.push_str("Recommendations:\n");
    for r in &report.recommendations {
        out.push_str(&format!("  - {r}\n"));
    }
    out.push_str("Next steps:\n");
    for a in &report.recommended_actions {
        out.push_str(&format!("  - {a}\n"));
    }
    out.push('\n');
    out.push_str(&report.disclaimer);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin().expect("builtin catalog")
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("carecheck").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn diagnose_text_lists_matches() {
        let cli = parse(&["diagnose", "runny nose", "sneezing", "congestion"]);
        let out = run(&kb(), cli.command.expect("command"), cli.json).expect("run");
        assert!(out.starts_with("Urgency: medium\n"));
        assert!(out.contains(" 33%  Common Cold  [Runny nose, Sneezing]"));
    }

    #[test]
    fn diagnose_json_echoes_patient_info() {
        let cli = parse(&["diagnose", "chest pain", "--age", "60", "--json"]);
        assert!(cli.json);
        let out = run(&kb(), cli.command.expect("command"), cli.json).expect("run");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json output");
        assert_eq!(value["urgency"], "emergency");
        assert_eq!(value["patientInfo"]["age"], "60");
        assert_eq!(value["patientInfo"]["gender"], "Not provided");
    }

    #[test]
    fn diagnose_requires_a_symptom() {
        assert!(Cli::try_parse_from(["carecheck", "diagnose"]).is_err());
    }

    #[test]
    fn catalog_flag_is_global() {
        let cli = parse(&["diseases", "--catalog", "/tmp/catalog.yaml"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/catalog.yaml")));
    }

    #[test]
    fn catalog_flag_overrides_env_value() {
        let cfg = resolve_config(
            Some(PathBuf::from("/tmp/flag.yaml")),
            Some("/definitely/not/here.yaml".into()),
        )
        .expect("flag wins without reading env value");
        assert_eq!(cfg.catalog_path(), Some(std::path::Path::new("/tmp/flag.yaml")));
    }

    #[test]
    fn env_value_is_the_catalog_fallback() {
        let cfg = resolve_config(None, None).expect("builtin");
        assert_eq!(cfg.catalog_path(), None);

        let err = resolve_config(None, Some("/definitely/not/here.yaml".into()))
            .expect_err("missing env catalog");
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn disease_search_filters() {
        let out = run(
            &kb(),
            Commands::Diseases {
                search: Some("diabetes".into()),
            },
            false,
        )
        .expect("run");
        assert_eq!(out, "dis004\tType 2 Diabetes (Endocrine)\n");
    }

    #[test]
    fn medicine_lookup_by_unknown_id_fails() {
        let err = run(
            &kb(),
            Commands::Medicines {
                search: None,
                category: None,
                id: Some("med999".into()),
            },
            false,
        )
        .expect_err("unknown id");
        assert!(err.to_string().contains("med999"));
    }

    #[test]
    fn medicine_flags_conflict() {
        assert!(
            Cli::try_parse_from(["carecheck", "medicines", "--search", "x", "--id", "med001"])
                .is_err()
        );
    }

    #[test]
    fn empty_search_reports_no_results() {
        let out = run(
            &kb(),
            Commands::Symptoms {
                search: Some("zzz-not-a-symptom".into()),
            },
            false,
        )
        .expect("run");
        assert_eq!(out, "No results found.\n");
    }
}
