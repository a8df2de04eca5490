//! FeatureBoard CLI Client
//!
//! Command-line interface for a running FeatureBoard server.

use clap::{Parser, Subcommand};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use featureboard::network::{DeleteResponse, ErrorBody};
use featureboard::validate::{CreateFeature, UpdateFeature};
use featureboard::{Feature, FeatureError, Result, Status};

/// FeatureBoard CLI
#[derive(Parser, Debug)]
#[command(name = "featureboard-cli")]
#[command(about = "CLI for the FeatureBoard feature tracker")]
#[command(version)]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all features
    List,

    /// Add a feature to the backlog
    Add {
        /// Feature title
        title: String,

        /// Feature description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Change any of a feature's fields
    Update {
        /// Feature id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// backlog, todo, inProgress or done
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Move a feature to another column
    Move {
        /// Feature id
        id: String,

        /// backlog, todo, inProgress or done
        status: Status,
    },

    /// Delete a feature
    Delete {
        /// Feature id
        id: String,
    },
}

fn main() {
    let args = Args::parse();
    let api = Api::new(&args.server);

    if let Err(e) = run(&api, args.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(api: &Api, command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            let features: Vec<Feature> = api.send(api.http.get(api.features_url()))?;
            for feature in &features {
                print_feature(feature);
            }
        }
        Commands::Add { title, description } => {
            let body = CreateFeature {
                title: Some(title),
                description,
            };
            let feature: Feature = api.send(api.http.post(api.features_url()).json(&body))?;
            print_feature(&feature);
        }
        Commands::Update {
            id,
            title,
            description,
            status,
        } => {
            let body = UpdateFeature {
                title: title.map(Some),
                description,
                status: status.map(|s| Some(s.to_string())),
            };
            let feature: Feature = api.send(api.http.put(api.feature_url(&id)).json(&body))?;
            print_feature(&feature);
        }
        Commands::Move { id, status } => {
            let body = UpdateFeature {
                status: Some(Some(status.to_string())),
                ..Default::default()
            };
            let feature: Feature = api.send(api.http.put(api.feature_url(&id)).json(&body))?;
            print_feature(&feature);
        }
        Commands::Delete { id } => {
            let _: DeleteResponse = api.send(api.http.delete(api.feature_url(&id)))?;
            println!("deleted {}", id);
        }
    }

    Ok(())
}

fn print_feature(feature: &Feature) {
    println!("{} [{}] {}", feature.id, feature.status, feature.title);
}

/// Thin wrapper over the REST endpoints
struct Api {
    http: Client,
    base: String,
}

impl Api {
    fn new(base: &str) -> Self {
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn features_url(&self) -> String {
        format!("{}/api/features", self.base)
    }

    fn feature_url(&self, id: &str) -> String {
        format!("{}/api/features/{}", self.base, id)
    }

    /// Send a request and decode the success body, or surface the server's error message
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .map_err(|e| FeatureError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .map_err(|e| FeatureError::Network(format!("bad response body: {}", e)));
        }

        let body = response
            .json::<ErrorBody>()
            .unwrap_or_else(|_| ErrorBody::new(status.to_string()));
        Err(FeatureError::Network(format!("{} ({})", body.error, status)))
    }
}
