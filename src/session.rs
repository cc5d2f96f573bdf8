use tokio::sync::OnceCell;

/// Who is responsible for the HTTP session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Ownership {
    /// Opened by the client, released on [`crate::Client::close`].
    Owned,

    /// Supplied by the caller, who keeps it alive and releases it.
    Shared,
}

/// HTTP session handle together with its ownership flag.
pub struct Session {
    inner: OnceCell<reqwest::Client>,
    ownership: Ownership,
}

impl Session {
    /// Session to be lazily opened on first use.
    pub fn owned() -> Self {
        Self { inner: OnceCell::new(), ownership: Ownership::Owned }
    }

    pub fn shared(client: reqwest::Client) -> Self {
        Self { inner: OnceCell::new_with(Some(client)), ownership: Ownership::Shared }
    }

    pub const fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn is_open(&self) -> bool {
        self.inner.initialized()
    }

    /// Get the session, opening an owned one if needed.
    pub async fn get(&self) -> Result<&reqwest::Client, reqwest::Error> {
        self.inner.get_or_try_init(|| async { reqwest::Client::builder().build() }).await
    }

    /// Release the session if it is ours and open.
    ///
    /// Returns whether anything has been released.
    pub fn close(&mut self) -> bool {
        match self.ownership {
            // Dropping the last handle shuts the connection pool down.
            Ownership::Owned => self.inner.take().is_some(),
            Ownership::Shared => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_owned_lifecycle() -> anyhow::Result<()> {
        let mut session = Session::owned();
        assert!(!session.is_open());
        assert!(!session.close());

        session.get().await?;
        assert!(session.is_open());
        assert!(session.close());
        assert!(!session.is_open());
        assert!(!session.close());

        // Reopens on demand.
        session.get().await?;
        assert!(session.is_open());
        Ok(())
    }

    #[test]
    fn test_shared_is_never_closed() {
        let mut session = Session::shared(reqwest::Client::new());
        assert_eq!(session.ownership(), Ownership::Shared);
        assert!(session.is_open());
        assert!(!session.close());
        assert!(!session.close());
        assert!(session.is_open());
    }
}
