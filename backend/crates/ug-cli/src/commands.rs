use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Unlink the Google identity of the user owning the token
    Unlink {
        /// Access token of the user (sent as a Bearer credential)
        #[arg(long)]
        token: String,
    },

    /// Check that the server is up
    Health,
}
