mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Search, SearchCache, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.search.max_candidates == 0 {
		return Err(Error::Validation {
			message: "search.max_candidates must be greater than zero.".to_string(),
		});
	}
	if !cfg.search.score_threshold.is_finite() {
		return Err(Error::Validation {
			message: "search.score_threshold must be a finite number.".to_string(),
		});
	}
	if !(0.0..=100.0).contains(&cfg.search.score_threshold) {
		return Err(Error::Validation {
			message: "search.score_threshold must be in the range 0.0-100.0.".to_string(),
		});
	}
	if cfg.search.max_query_chars == 0 {
		return Err(Error::Validation {
			message: "search.max_query_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.search.cache.ttl_seconds <= 0 {
		return Err(Error::Validation {
			message: "search.cache.ttl_seconds must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
}
