use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// Public newline-delimited list of common English words.
pub const DEFAULT_WORD_LIST_URL: &str = "https://www.mit.edu/~ecprice/wordlist.10000";

/// Upper bound for a remote fetch. Longer timeouts are clamped to it.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(5);

/// Shortest and longest remote word kept, in characters.
const MIN_WORD_LEN: usize = 4;
const MAX_WORD_LEN: usize = 12;

/// Location and time limit of the remote word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordListConfig {
	pub url: String,
	pub timeout: Duration,
}

impl Default for WordListConfig {
	fn default() -> Self {
		Self {
			url: DEFAULT_WORD_LIST_URL.to_owned(),
			timeout: MAX_TIMEOUT,
		}
	}
}

impl WordListConfig {
	/// Default configuration pointing at another URL.
	pub fn with_url(url: impl Into<String>) -> Self {
		Self { url: url.into(), ..Self::default() }
	}

	/// Timeout actually applied to the request.
	pub fn effective_timeout(&self) -> Duration {
		self.timeout.min(MAX_TIMEOUT)
	}
}

/// Source of generic words, usually a remote word list.
///
/// One call is one attempt: implementations must not retry.
pub trait WordListFetch {
	fn fetch(&self) -> Result<Vec<String>, FetchError>;
}

impl<T: WordListFetch + ?Sized> WordListFetch for &T {
	fn fetch(&self) -> Result<Vec<String>, FetchError> {
		(**self).fetch()
	}
}

/// Downloads the word list over HTTP with a blocking client.
///
/// The client is built once, with the configured timeout, and reused
/// for every fetch.
#[derive(Clone, Debug)]
pub struct HttpWordList {
	config: WordListConfig,
	client: Client,
}

impl HttpWordList {
	/// # Errors
	/// `Request` if the HTTP client cannot be initialized.
	pub fn new(config: WordListConfig) -> Result<Self, FetchError> {
		let client = Client::builder()
			.timeout(config.effective_timeout())
			.build()?;
		Ok(Self { config, client })
	}
}

impl WordListFetch for HttpWordList {
	/// Sends a single GET request and filters the body with [`filter_word_list`].
	///
	/// # Errors
	/// - `Request` on transport errors and timeouts
	/// - `Status` on any non-2xx answer
	/// - `Decode` if the body is not UTF-8
	fn fetch(&self) -> Result<Vec<String>, FetchError> {
		debug!("Fetching word list from {}", self.config.url);
		let response = self.client.get(&self.config.url).send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}

		let body = String::from_utf8(response.bytes()?.to_vec())?;
		Ok(filter_word_list(&body))
	}
}

/// Splits a word list body into lines and keeps usable words.
///
/// - Each line is trimmed
/// - Kept only if it has 4 to 12 characters, all alphabetic
/// - Kept words are lowercased
///
/// Example:
/// `"Apple\nto\nwell-known\n  Zebra \n"` → `["apple", "zebra"]`
pub fn filter_word_list(body: &str) -> Vec<String> {
	body.lines()
		.map(str::trim)
		.filter(|word| {
			let len = word.chars().count();
			(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) && word.chars().all(char::is_alphabetic)
		})
		.map(str::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::TcpListener;
	use std::thread;

	use super::*;
	use crate::model::word_source::WordSource;
	use crate::model::words::fallback_union;

	/// Serves a single canned HTTP response on a loopback port.
	///
	/// Returns the URL to request.
	fn serve_once(status: &str, body: &'static [u8]) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let url = format!("http://{}/wordlist", listener.local_addr().unwrap());
		let head = format!(
			"HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
			body.len()
		);

		thread::spawn(move || {
			let (mut stream, _) = listener.accept().unwrap();
			// Drain the request head before answering
			let mut request = Vec::new();
			let mut buf = [0u8; 1024];
			while !request.windows(4).any(|w| w == b"\r\n\r\n") {
				match stream.read(&mut buf) {
					Ok(0) | Err(_) => break,
					Ok(n) => request.extend_from_slice(&buf[..n]),
				}
			}
			stream.write_all(head.as_bytes()).unwrap();
			stream.write_all(body).unwrap();
			stream.flush().unwrap();
		});

		url
	}

	fn fetcher_for(url: String) -> HttpWordList {
		HttpWordList::new(WordListConfig { url, timeout: Duration::from_secs(2) }).unwrap()
	}

	#[test]
	fn filter_keeps_alphabetic_words_of_valid_length() {
		let body = "Apple\nto\nwell-known\n  Zebra \nabcdefghijklm\nabcdefghijkl\nr2d2\n\nword\r\n";
		assert_eq!(filter_word_list(body), vec!["apple", "zebra", "abcdefghijkl", "word"]);
	}

	#[test]
	fn filter_of_empty_body_is_empty() {
		assert!(filter_word_list("").is_empty());
		assert!(filter_word_list("\n\n  \n").is_empty());
	}

	#[test]
	fn timeout_is_clamped() {
		let config = WordListConfig {
			url: DEFAULT_WORD_LIST_URL.to_owned(),
			timeout: Duration::from_secs(60),
		};
		assert_eq!(config.effective_timeout(), MAX_TIMEOUT);

		let short = WordListConfig { timeout: Duration::from_millis(200), ..WordListConfig::default() };
		assert_eq!(short.effective_timeout(), Duration::from_millis(200));
	}

	#[test]
	fn with_url_keeps_default_timeout() {
		let config = WordListConfig::with_url("http://localhost/words.txt");
		assert_eq!(config.url, "http://localhost/words.txt");
		assert_eq!(config.timeout, MAX_TIMEOUT);
	}

	#[test]
	fn unreachable_host_is_a_request_error() {
		// Port 1 on loopback refuses connections immediately.
		let fetcher = HttpWordList::new(WordListConfig {
			url: "http://127.0.0.1:1/words".to_owned(),
			timeout: Duration::from_secs(1),
		})
		.unwrap();
		assert!(matches!(fetcher.fetch(), Err(FetchError::Request(_))));
	}

	#[test]
	fn malformed_url_is_a_request_error() {
		let fetcher = HttpWordList::new(WordListConfig::with_url("not a url")).unwrap();
		assert!(matches!(fetcher.fetch(), Err(FetchError::Request(_))));
	}

	#[test]
	fn successful_response_is_filtered() {
		let url = serve_once("200 OK", b"Apple\nto\nThunder\nwell-known\n");
		assert_eq!(fetcher_for(url).fetch().unwrap(), vec!["apple", "thunder"]);
	}

	#[test]
	fn not_found_is_a_status_error() {
		let url = serve_once("404 Not Found", b"missing");
		assert!(matches!(fetcher_for(url).fetch(), Err(FetchError::Status(404))));
	}

	#[test]
	fn server_error_is_a_status_error() {
		let url = serve_once("500 Internal Server Error", b"");
		assert!(matches!(fetcher_for(url).fetch(), Err(FetchError::Status(500))));
	}

	#[test]
	fn invalid_utf8_body_is_a_decode_error() {
		let url = serve_once("200 OK", b"\xff\xfe\n");
		assert!(matches!(fetcher_for(url).fetch(), Err(FetchError::Decode(_))));
	}

	#[test]
	fn word_source_falls_back_after_not_found() {
		let url = serve_once("404 Not Found", b"");
		let mut source = WordSource::with_parts(fetcher_for(url), rand::rng());
		let union = fallback_union();

		let words = source.get_generic_words(3, true);
		assert_eq!(words.len(), 3);
		assert!(words.iter().all(|w| union.contains(&w.as_str())), "{words:?}");
		assert_eq!(source.cached_words(), Some(&[][..]));
	}

	#[test]
	fn word_source_uses_served_words() {
		let url = serve_once("200 OK", b"alpha\nbravo\n");
		let mut source = WordSource::with_parts(fetcher_for(url), rand::rng());
		let words = source.get_generic_words(6, true);
		assert!(words.iter().all(|w| w == "alpha" || w == "bravo"), "{words:?}");
	}
}
