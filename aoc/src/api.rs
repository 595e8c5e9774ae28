use std::{error, fmt::Display};

use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::{
    blocking::{Client as HttpClient, Response},
    header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT},
    StatusCode,
};

use crate::puzzle::{Part, Puzzle};

pub const BASE_URL: &str = "https://adventofcode.com";

#[derive(Debug)]
pub enum Error {
    MissingSession,
    NotFound(String),
    UnexpectedStatus(String, StatusCode),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingSession => write!(
                f,
                "No session token, set SESSION_TOKEN or pass --session to talk to Advent of Code."
            ),
            Error::NotFound(url) => write!(f, "Could not find anything at given url({}).", url),
            Error::UnexpectedStatus(url, status) => {
                write!(f, "Request to given url({}) failed with status {}.", url, status)
            }
        }
    }
}

impl error::Error for Error {}

pub struct Client {
    http: HttpClient,
    base_url: String,
}

impl Client {
    pub fn new(session: Option<&str>) -> Result<Self> {
        Self::with_base_url(session, BASE_URL)
    }

    pub fn with_base_url(session: Option<&str>, base_url: &str) -> Result<Self> {
        let session = session
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingSession)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("session={}", session))
                .context("Failed to put session token into request header.")?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                "aoc-rs/",
                env!("CARGO_PKG_VERSION"),
                " (command-line puzzle helper)"
            )),
        );
        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client.")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn fetch_question(&self, puzzle: &Puzzle) -> Result<String> {
        let url = format!("{}/{}/day/{}", self.base_url, puzzle.year(), puzzle.day());
        info!("Downloading question for {}.", puzzle);
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("Failed to fetch question from {}.", url))?;
        Self::body_text(&url, resp)
    }

    pub fn fetch_input(&self, puzzle: &Puzzle) -> Result<String> {
        let url = format!(
            "{}/{}/day/{}/input",
            self.base_url,
            puzzle.year(),
            puzzle.day()
        );
        info!("Downloading input for {}.", puzzle);
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("Failed to fetch input from {}.", url))?;
        Self::body_text(&url, resp)
    }

    pub fn submit_answer(&self, puzzle: &Puzzle, part: Part, answer: &str) -> Result<String> {
        let url = format!(
            "{}/{}/day/{}/answer",
            self.base_url,
            puzzle.year(),
            puzzle.day()
        );
        info!("Submitting answer({}) for {} part {}.", answer, puzzle, part);
        let level = part.level().to_string();
        let resp = self
            .http
            .post(&url)
            .form(&[("level", level.as_str()), ("answer", answer)])
            .send()
            .with_context(|| format!("Failed to submit answer to {}.", url))?;
        Self::body_text(&url, resp)
    }

    fn body_text(url: &str, resp: Response) -> Result<String> {
        let status = resp.status();
        debug!("Got status {} from {}.", status, url);
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_string()).into());
        } else if !status.is_success() {
            return Err(Error::UnexpectedStatus(url.to_string(), status).into());
        }

        resp.text()
            .with_context(|| format!("Failed to read response body from {}.", url))
    }
}
