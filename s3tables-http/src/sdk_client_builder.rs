use crate::HttpClientBuilder;

/// An SDK client builder that is handed a configured HTTP client builder
/// and builds its transport from it.
pub trait SdkClientBuilder {
    type HttpBuilder: HttpClientBuilder + Default;

    fn http_client_builder(&mut self, builder: Self::HttpBuilder);
}
