//! `GetTags`: list cost allocation tag keys or the values of one key.

use costexplorer_core::value_object;

use crate::date_interval::DateInterval;

value_object! {
    /// Request of `GetTags`. Without `TagKey` the result lists tag keys,
    /// with it the values of that key.
    pub struct GetTagsRequest {
        string search_string("SearchString"): String => set_search_string, with_search_string;
        object time_period("TimePeriod"): DateInterval => set_time_period, with_time_period;
        string tag_key("TagKey"): String => set_tag_key, with_tag_key;
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
    }
}

value_object! {
    /// Result of `GetTags`.
    pub struct GetTagsResult {
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
        list tags("Tags"): String => set_tags, with_tags, add_tags;
        scalar return_size("ReturnSize"): i32 => set_return_size, with_return_size;
        scalar total_size("TotalSize"): i32 => set_total_size, with_total_size;
    }
}
