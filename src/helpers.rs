use crate::consts::{LOCAL_API_URL, PRODUCTION_API_URL};

/// Which deployment of the quotes API requests are sent to.
#[derive(Copy, Clone, Debug)]
pub enum BaseUrl {
    /// A locally served instance of the API, e.g. `vercel dev`.
    Localhost,
    Production,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Localhost => LOCAL_API_URL.to_string(),
            BaseUrl::Production => PRODUCTION_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_mapping() {
        assert_eq!(BaseUrl::Production.get_url(), PRODUCTION_API_URL);
        assert_eq!(BaseUrl::Localhost.get_url(), LOCAL_API_URL);
    }
}
