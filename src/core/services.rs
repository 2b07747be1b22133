use crate::core::VgError;

/// A trait for anything that can retrieve a raw fund resource body.
///
/// This is the seam between the wire transport and the decoding/pagination logic:
/// profile, holdings and diversification fetching are written against it, so
/// they can run over a substitute transport in tests. It is implemented by
/// [`VgClient`](crate::VgClient).
pub trait FundService: Send + Sync {
    /// Performs exactly one request for `{symbol}/{resource}.json[?query]` and
    /// returns the raw response body.
    ///
    /// # Arguments
    /// * `symbol` - The fund ticker, already normalized.
    /// * `resource` - The resource path below the fund, e.g. `profile` or
    ///   `portfolio-holding/stock`.
    /// * `query` - An optional raw query string without the leading `?`.
    fn fetch_resource<'a>(
        &'a self,
        symbol: &'a str,
        resource: &'a str,
        query: Option<&'a str>,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<String, VgError>> + Send + 'a>,
    >;
}
