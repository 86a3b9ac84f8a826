use s3tables_http::{HttpClientBuilder, SdkClientBuilder};

pub struct MockSdkClientBuilder<B> {
    pub http_client_builder: Option<B>,
    pub times_set: usize,
}

impl<B> MockSdkClientBuilder<B> {
    pub fn new() -> Self {
        Self {
            http_client_builder: None,
            times_set: 0,
        }
    }
}

impl<B> SdkClientBuilder for MockSdkClientBuilder<B>
where
    B: HttpClientBuilder + Default,
{
    type HttpBuilder = B;

    fn http_client_builder(&mut self, builder: B) {
        self.times_set += 1;
        self.http_client_builder = Some(builder);
    }
}
