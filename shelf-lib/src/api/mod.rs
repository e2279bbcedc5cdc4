use serde::de::DeserializeOwned;

pub(crate) mod covers;
pub(crate) mod open_library;
pub(crate) mod sheet;

pub use open_library::{BookDetails, NO_DESCRIPTION};

/// The HTTP operations the catalog needs.
///
/// Implemented for [`reqwest::blocking::Client`]; tests provide their own implementation so no
/// request leaves the machine.
pub trait Client
where
    Self: Default,
{
    /// GET `url` and return the body as text.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the request fails or the status is not a success. An empty
    /// body is not an error.
    fn get_text(&self, url: &str) -> Result<String, Error>;

    /// GET `url` and deserialize the JSON body.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the request fails or the body is not the expected JSON.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;

    /// Checks that `url` can be loaded without downloading it.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the request fails or the status is not a success.
    fn probe(&self, url: &str) -> Result<(), Error>;
}

impl Client for reqwest::blocking::Client {
    fn get_text(&self, url: &str) -> Result<String, Error> {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?
            .text()
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }

    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }

    fn probe(&self, url: &str) -> Result<(), Error> {
        self.head(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map(|_| ())
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, EmptyTextProducer, MockClient, NetworkErrorProducer, Producer,
    URL_SINK,
};

use crate::{Error, ErrorKind};

#[cfg(test)]
mod test {

    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Vec<String>> = std::cell::RefCell::new(Vec::new());
    }

    /// Asserts that the last URL requested through a [`MockClient`] is the expected one.
    ///
    /// The [`MockClient`] pushes every URL it is given onto the thread local `URL_SINK`, which
    /// lets tests check the URL an operation built without sending anything.
    ///
    /// ```ignore
    /// // .. test code including `MockClient`
    ///
    /// let url = crate::api::URL_SINK.with(|urls| urls.borrow().last().cloned().unwrap_or_default());
    /// assert_eq!("expected url here", url);
    /// ```
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK
                .with(|urls| urls.borrow().last().cloned().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<String> = EmptyTextProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<String>> MockClient<P> {
        fn record(url: &str) {
            URL_SINK.with(|sink| sink.borrow_mut().push(url.to_owned()));
        }
    }

    impl<P: Producer<String>> Client for MockClient<P> {
        fn get_text(&self, url: &str) -> Result<String, Error> {
            Self::record(url);
            P::produce()
        }

        fn get_json<T>(&self, url: &str) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            Self::record(url);
            P::produce().and_then(|json| {
                serde_json::from_str(&json).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
            })
        }

        fn probe(&self, url: &str) -> Result<(), Error> {
            Self::record(url);
            P::produce().map(|_| ())
        }
    }

    macro_rules! impl_text_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<String> for $producer {
                    fn produce() -> Result<String, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_text_producer! {
        EmptyTextProducer => Ok("".to_owned()),
        NetworkErrorProducer => Err(Error::new(ErrorKind::IO, "Network error")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_text_producer;

    mod reqwest_client {
        use std::{
            io::{Read, Write},
            net::TcpListener,
            thread,
        };

        use super::super::Client;

        /// Serve a single request with `response` on a local port and return its URL.
        fn serve_once(response: &'static str) -> String {
            let listener = TcpListener::bind("127.0.0.1:0").expect("Cannot bind local port for test");
            let addr = listener.local_addr().expect("Cannot read local address for test");

            thread::spawn(move || {
                if let Ok((mut stream, _)) = listener.accept() {
                    let mut request = Vec::new();
                    let mut buf = [0; 1024];
                    while let Ok(n) = stream.read(&mut buf) {
                        request.extend_from_slice(&buf[..n]);
                        if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    let _ = stream.write_all(response.as_bytes());
                }
            });

            format!("http://{addr}/sheet.csv")
        }

        fn client() -> reqwest::blocking::Client {
            reqwest::blocking::Client::builder()
                .no_proxy()
                .build()
                .expect("Cannot build client for test")
        }

        #[test]
        fn empty_body_is_empty_text() {
            let url =
                serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");

            assert_eq!("", client().get_text(&url).unwrap());
        }

        #[test]
        fn failure_status_is_an_io_error() {
            let url = serve_once(
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );

            let err = client().get_text(&url).unwrap_err();
            assert_eq!(crate::ErrorKind::IO, err.kind());
        }
    }
}
