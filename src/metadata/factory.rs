use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::metadata::openlibrary::OpenLibraryProvider;
use crate::metadata::provider::MetadataProvider;

pub(crate) fn create_metadata_provider(config: &Configuration) -> LibraryResult<Box<dyn MetadataProvider>> {
    Ok(Box::new(OpenLibraryProvider::new(config)?))
}
