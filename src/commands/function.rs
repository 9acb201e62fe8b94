use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use crate::client::{Client, FunctionCode, FunctionSpec, SwiftObject};
use crate::output;
use crate::package::{md5_hex, resolve_package};

use super::FilterArgs;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeType {
    Package,
    Swift,
    Image,
}

#[derive(Subcommand, Debug)]
pub enum FunctionCommands {
    /// List functions
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Register a new function
    Create(CreateArgs),
    /// Delete one or more functions by id
    Delete {
        #[arg(required = true, value_name = "FUNCTION")]
        function: Vec<String>,
    },
    /// Show one function
    Show { function: String },
    /// Update a function's code or metadata
    Update(UpdateArgs),
    /// Release the workers currently assigned to a function
    Detach { function: String },
    /// Download a function's code package
    Download {
        function: String,
        /// Target file path; the function id is used when not provided
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add workers to a function's pool
    Scaleup {
        function: String,
        /// Number of workers to scale up
        #[arg(long, default_value_t = 1, value_parser = worker_count)]
        count: u32,
    },
    /// Remove workers from a function's pool
    Scaledown {
        function: String,
        /// Number of workers to scale down
        #[arg(long, default_value_t = 1, value_parser = worker_count)]
        count: u32,
    },
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Code type; inferred from the supplied source arguments when omitted
    #[arg(long, value_enum)]
    code_type: Option<CodeType>,
    /// Runtime ID
    #[arg(long)]
    runtime: Option<String>,
    /// Function name
    #[arg(long)]
    name: Option<String>,
    /// Function entry in the format of <module_name>.<method_name>
    #[arg(long)]
    entry: Option<String>,
    /// Code file path
    #[arg(long, value_name = "CODE_FILE_PATH", conflicts_with = "package")]
    file: Option<PathBuf>,
    /// Code package zip file path
    #[arg(long, value_name = "CODE_PACKAGE_PATH")]
    package: Option<PathBuf>,
    /// Container name in the object store
    #[arg(long)]
    container: Option<String>,
    /// Object name in the object store
    #[arg(long)]
    object: Option<String>,
    /// Container image name
    #[arg(long)]
    image: Option<String>,
    /// CPU reserved per execution, in millicores
    #[arg(long)]
    cpu: Option<i64>,
    /// Memory reserved per execution, in bytes
    #[arg(long)]
    memory_size: Option<i64>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Function ID
    id: String,
    /// Function name
    #[arg(long)]
    name: Option<String>,
    /// Function description
    #[arg(long)]
    description: Option<String>,
    /// Function entry in the format of <module_name>.<method_name>
    #[arg(long)]
    entry: Option<String>,
    /// Code file path
    #[arg(long, value_name = "CODE_FILE_PATH", conflicts_with = "package")]
    file: Option<PathBuf>,
    /// Code package zip file path
    #[arg(long, value_name = "CODE_PACKAGE_PATH")]
    package: Option<PathBuf>,
    /// Container name in the object store
    #[arg(long)]
    container: Option<String>,
    /// Object name in the object store
    #[arg(long)]
    object: Option<String>,
}

pub async fn run(cmd: FunctionCommands, client: &Client) -> Result<()> {
    match cmd {
        FunctionCommands::List { filters } => {
            let filters = filters.parse()?;
            let functions = client.functions().list(&filters).await?;
            output::print_list(output::FUNCTION_COLUMNS, &functions);
        }
        FunctionCommands::Create(args) => create(args, client).await?,
        FunctionCommands::Delete { function } => {
            let api = client.functions();
            super::delete_each("function", &function, |id| api.delete(id)).await?;
        }
        FunctionCommands::Show { function } => {
            let function = client.functions().get(&function).await?;
            output::print_detail(output::FUNCTION_COLUMNS, &function);
        }
        FunctionCommands::Update(args) => update(args, client).await?,
        FunctionCommands::Detach { function } => {
            if let Err(e) = client.functions().detach(&function).await {
                eprintln!("{e}");
                bail!("Unable to detach the specified function.");
            }
            println!("Request to detach function {function} has been accepted.");
        }
        FunctionCommands::Download { function, output } => {
            let content = client.functions().download(&function).await?;
            let target = match output {
                Some(path) if path.is_absolute() => path,
                Some(path) => std::env::current_dir()?.join(path),
                None => std::env::current_dir()?.join(format!("{function}.zip")),
            };
            fs::write(&target, &content)?;
            println!("Code package downloaded to {}", target.display());
        }
        FunctionCommands::Scaleup { function, count } => {
            if let Err(e) = client.functions().scaleup(&function, count).await {
                eprintln!("{e}");
                bail!("Unable to scale up the specified function.");
            }
            println!("Request to scale up function {function} has been accepted.");
        }
        FunctionCommands::Scaledown { function, count } => {
            if let Err(e) = client.functions().scaledown(&function, count).await {
                eprintln!("{e}");
                bail!("Unable to scale down the specified function.");
            }
            println!("Request to scale down function {function} has been accepted.");
        }
    }
    Ok(())
}

async fn create(args: CreateArgs, client: &Client) -> Result<()> {
    let spec = FunctionSpec {
        name: args.name.clone(),
        entry: args.entry.clone(),
        cpu: args.cpu,
        memory_size: args.memory_size,
        ..Default::default()
    };

    let function = match args.code_type.or_else(|| infer_code_type(&args)) {
        Some(CodeType::Package) => {
            if args.file.is_none() && args.package.is_none() {
                bail!("Package or file needs to be specified.");
            }
            if args.runtime.is_none() {
                bail!("Runtime needs to be specified for package type function.");
            }

            let pkg = resolve_package(args.package.as_deref(), args.file.as_deref())?;
            let content = pkg.read()?;
            let code = FunctionCode::Package {
                md5sum: Some(md5_hex(&content)),
            };

            let function = client
                .functions()
                .create(args.runtime.as_deref(), &code, Some(content), &spec)
                .await?;

            // The zip built from --file was ours to make and ours to remove.
            pkg.cleanup()?;
            function
        }
        Some(CodeType::Swift) => {
            if args.container.is_none() || args.object.is_none() {
                bail!("Container name and object name need to be specified.");
            }
            if args.runtime.is_none() {
                bail!("Runtime needs to be specified for swift type function.");
            }

            let code = FunctionCode::Swift {
                swift: SwiftObject {
                    container: args.container.clone(),
                    object: args.object.clone(),
                },
            };
            client
                .functions()
                .create(args.runtime.as_deref(), &code, None, &spec)
                .await?
        }
        Some(CodeType::Image) => {
            let Some(image) = args.image.clone() else {
                bail!("Image needs to be specified.");
            };
            client
                .functions()
                .create(None, &FunctionCode::Image { image }, None, &spec)
                .await?
        }
        None => bail!(
            "Code type cannot be determined. Supply --file/--package, --container/--object, or --image."
        ),
    };

    output::print_detail(output::FUNCTION_COLUMNS, &function);
    Ok(())
}

async fn update(args: UpdateArgs, client: &Client) -> Result<()> {
    let spec = FunctionSpec {
        name: args.name.clone(),
        description: args.description.clone(),
        entry: args.entry.clone(),
        ..Default::default()
    };

    let mut code = None;
    let mut content = None;
    if args.file.is_some() || args.package.is_some() {
        code = Some(FunctionCode::Package { md5sum: None });
        let pkg = resolve_package(args.package.as_deref(), args.file.as_deref())?;
        content = Some(pkg.read()?);
    } else if args.container.is_some() || args.object.is_some() {
        code = Some(FunctionCode::Swift {
            swift: SwiftObject {
                container: args.container.clone(),
                object: args.object.clone(),
            },
        });
    }

    let function = client
        .functions()
        .update(&args.id, code.as_ref(), content, &spec)
        .await?;
    output::print_detail(output::FUNCTION_COLUMNS, &function);
    Ok(())
}

fn infer_code_type(args: &CreateArgs) -> Option<CodeType> {
    if args.file.is_some() || args.package.is_some() {
        Some(CodeType::Package)
    } else if args.container.is_some() || args.object.is_some() {
        Some(CodeType::Swift)
    } else if args.image.is_some() {
        Some(CodeType::Image)
    } else {
        None
    }
}

fn worker_count(value: &str) -> Result<u32, String> {
    value
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n as u32)
        .ok_or_else(|| "Worker count must be a positive integer.".to_string())
}
