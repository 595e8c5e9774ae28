use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
};

use aoc::{
    api::Client,
    puzzle::{Part, Puzzle},
};

/// Serve one request with given status and body, then hand back the raw request text.
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let body_len = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.trim()
                            .eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if request.len() >= head_end + 4 + body_len {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }

        stream.write_all(response.as_bytes()).unwrap();
        sender
            .send(String::from_utf8_lossy(&request).to_string())
            .unwrap();
    });

    (base_url, receiver)
}

#[test]
fn fetch_input_send_session_and_user_agent() {
    let (base_url, requests) = serve_once("200 OK", "1\n2\n3\n");
    let client = Client::with_base_url(Some("abc123"), &base_url).unwrap();

    let input = client
        .fetch_input(&Puzzle::new(2024, 1).unwrap())
        .unwrap();

    assert_eq!(input, "1\n2\n3\n");
    let request = requests.recv().unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("GET /2024/day/1/input HTTP/1.1\r\n"));
    assert!(lower.contains("\r\ncookie: session=abc123\r\n"));
    assert!(lower.contains("\r\nuser-agent: aoc-rs/"));
}

#[test]
fn submit_answer_post_level_and_answer_form() {
    let (base_url, requests) = serve_once(
        "200 OK",
        "<article><p>That's the right answer!</p></article>",
    );
    let client = Client::with_base_url(Some("abc123"), &format!("{}/", base_url)).unwrap();

    let page = client
        .submit_answer(&Puzzle::new(2023, 5).unwrap(), Part::Two, "42")
        .unwrap();

    assert!(page.contains("That's the right answer!"));
    let request = requests.recv().unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /2023/day/5/answer HTTP/1.1\r\n"));
    assert!(lower.contains("\r\ncontent-type: application/x-www-form-urlencoded\r\n"));
    assert!(request.ends_with("\r\n\r\nlevel=2&answer=42"));
}

#[test]
fn fetch_question_report_missing_page() {
    let (base_url, _requests) = serve_once("404 Not Found", "404 Not Found");
    let client = Client::with_base_url(Some("abc123"), &base_url).unwrap();

    let err = client
        .fetch_question(&Puzzle::new(2024, 1).unwrap())
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        format!("Could not find anything at given url({}/2024/day/1).", base_url)
    );
}

#[test]
fn client_need_session_token() {
    for session in [None, Some(""), Some("   ")] {
        let err = Client::with_base_url(session, "http://127.0.0.1:1")
            .err()
            .unwrap();

        assert!(err.to_string().starts_with("No session token"));
    }
}
