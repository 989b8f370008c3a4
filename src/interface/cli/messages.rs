//! 사용자에게 출력하는 고정 문구.

pub const GREETING: &str = "Welcome to photo album.";

pub const HELP: &str = "Commands:\n\
'photo-album' for an id and title list of all photos in photo album.\n\
'photo-album <#>' for an id and title list of all photos from album #.\n\
'help' brings you to this screen.\n\
'exit' to exit.";

/// 줄바꿈 없이 출력한다.
pub const COMMAND_PROMPT: &str = ">";

pub const RETRIEVING_ALL_PHOTOS: &str = "Retrieving all photos...";

pub const INVALID_PHOTO_COMMAND: &str =
    "Invalid 'photo-album <#>' command. # must be a non-negative integer.";
pub const UNRECOGNIZED_COMMAND: &str = "Un-recognized command. Try 'help'";

pub const PROBLEM_NETWORK_CONNECTIVITY: &str = "There was a problem with the network connection.";
pub const PROBLEM_REQUEST_TIMEOUT: &str = "The request timed out.";
pub const PROBLEM_RESULTS: &str = "Unable to retrieve results.";

pub fn retrieving_album_photos(album_id: u16) -> String {
    format!("Retrieving photos from album #{album_id}...")
}

pub fn returned_results(count: usize) -> String {
    format!("Returned {count} results.")
}
