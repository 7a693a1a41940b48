//! Diesel table definitions for the vouch schema.

diesel::table! {
    /// Link owners. Each row backs one personal share link.
    users (id) {
        /// Primary key.
        id -> Uuid,
        /// Public routing key for the share link.
        slug -> Text,
        /// Private bearer secret for owner views and mutations.
        owner_key -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Recommendations submitted against share links.
    recommendations (id) {
        /// Primary key.
        id -> Uuid,
        /// Owning link owner.
        user_id -> Uuid,
        /// Recommendation text.
        body -> Text,
        /// Optional submitter name.
        name -> Nullable<Text>,
        /// Optional submitter contact.
        contact -> Nullable<Text>,
        /// Whether the owner has tried the recommendation.
        is_tried -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Public requests for a business recommendation.
    requests (id) {
        /// Primary key.
        id -> Uuid,
        /// Location the recommendation should cover.
        location -> Text,
        /// Kind of business sought.
        business_type -> Text,
        /// Optional free-text detail.
        comment -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Responses naming a business for a request.
    responses (id) {
        /// Primary key.
        id -> Uuid,
        /// Owning request.
        request_id -> Uuid,
        /// Name of the recommended business.
        business -> Text,
        /// Optional contact email.
        email -> Nullable<Text>,
        /// Optional Instagram handle.
        instagram -> Nullable<Text>,
        /// Optional website URL.
        website -> Nullable<Text>,
        /// Optional free-text notes.
        notes -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(recommendations -> users (user_id));
diesel::joinable!(responses -> requests (request_id));

diesel::allow_tables_to_appear_in_same_query!(users, recommendations);
diesel::allow_tables_to_appear_in_same_query!(requests, responses);
