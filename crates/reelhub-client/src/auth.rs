//! Gateway functions for the auth endpoints.

use reelhub_core::result::AppResult;
use reelhub_entity::user::Identity;

use crate::client::ApiClient;
use crate::dto::request::{
    PasswordChangeParams, PasswordsBody, SignInBody, SignInParams, SignUpBody, SignUpParams,
};
use crate::dto::response::UserEnvelope;
use crate::error;

impl ApiClient {
    /// POST /sign-up
    ///
    /// Registers a new account. The response body is not used; a follow-up
    /// [`ApiClient::sign_in`] with the same credentials yields the
    /// [`Identity`].
    pub async fn sign_up(&self, params: &SignUpParams) -> AppResult<()> {
        let request = self
            .http()
            .post(self.url("/sign-up"))
            .json(&SignUpBody::from(params));

        self.execute(request, "sign-up").await?;
        Ok(())
    }

    /// POST /sign-in
    ///
    /// Exchanges credentials for the signed-in [`Identity`], including the
    /// bearer token used by every authenticated call.
    pub async fn sign_in(&self, params: &SignInParams) -> AppResult<Identity> {
        let request = self
            .http()
            .post(self.url("/sign-in"))
            .json(&SignInBody::from(params));

        let response = self.execute(request, "sign-in").await?;
        let envelope: UserEnvelope = response
            .json()
            .await
            .map_err(|e| error::transport(e, "sign-in"))?;

        tracing::debug!(email = %envelope.user.email, "signed in");
        Ok(envelope.user)
    }

    /// DELETE /sign-out
    ///
    /// Invalidates the identity's token on the server.
    pub async fn sign_out(&self, identity: &Identity) -> AppResult<()> {
        let request = Self::authorize(self.http().delete(self.url("/sign-out")), identity);

        self.execute(request, "sign-out").await?;
        Ok(())
    }

    /// PATCH /change-password
    pub async fn change_password(
        &self,
        params: &PasswordChangeParams,
        identity: &Identity,
    ) -> AppResult<()> {
        let request = Self::authorize(
            self.http()
                .patch(self.url("/change-password"))
                .json(&PasswordsBody::from(params)),
            identity,
        );

        self.execute(request, "change-password").await?;
        Ok(())
    }
}
