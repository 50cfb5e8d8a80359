#[macro_export]
macro_rules! impl_client_get {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                #[allow(dead_code)]
                pub async fn [<get_ $entity_name_snake>](
                    &self,
                    id: uuid::Uuid,
                ) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .get(id)
                        .await
                        .map_err(|e| <$error>::ActorCommunicationError(e.to_string()))
                }
            }
        }
    };
}
