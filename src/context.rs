/// Borrowed view of the request fields the negotiator inspects.
///
/// `host` is the request's own `Host`; when present, an `Origin` pointing at
/// the same authority is treated as a same-origin request. Several
/// `Access-Control-Request-Headers` lines should be joined with `,`.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub host: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
