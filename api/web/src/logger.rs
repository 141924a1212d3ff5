/// Access log line: peer, request line, status, bytes and latency.
pub fn logger_format() -> &'static str {
    "🌐 [ApiWebServer] %a \"%r\" %s %b %Dms"
}
