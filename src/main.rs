use std::process::ExitCode;

use bitbucket_prb::logger::init::{init_logger, level_from_env};
use bitbucket_prb::{Endpoints, ProxyConfig, RepositoryClient, RepositoryConfig};

fn main() -> ExitCode {
    if !init_logger(level_from_env("RUST_LOG")) {
        eprintln!("[main] Unable to init logger");
    }
    let Some(config) = RepositoryConfig::from_env() else {
        log::error!("[main] Missing repository configuration in environment");
        return ExitCode::FAILURE;
    };
    let owner = config.owner().clone();
    let repo_name = config.repo_name().clone();
    let client_res = RepositoryClient::new(config, Endpoints::from_env(), ProxyConfig::from_env());
    let client = match client_res {
        Ok(client) => client,
        Err(e) => {
            log::error!("[main] Unable to build bitbucket client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pull_requests = client.list_pull_requests();
    log::info!("[main] {} pull requests open in {}/{}", pull_requests.len(), owner, repo_name);
    for pr in &pull_requests {
        let has_status = match pr.source_commit() {
            Some(commit) => client.has_build_status(commit),
            None => false,
        };
        log::info!(
            "[main] #{} {} ({} -> {}) build status reported: {}",
            pr.id(),
            pr.title(),
            pr.source_branch().unwrap_or("?"),
            pr.destination_branch().unwrap_or("?"),
            has_status
        );
    }
    ExitCode::SUCCESS
}
