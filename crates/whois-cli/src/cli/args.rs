//! Command-line argument definitions using clap.

use clap::{ArgAction, Args, Parser};

/// Client for the whois directory service
///
/// Picks the right server for domains, IP addresses, AS numbers and NIC
/// handles, and follows referrals to the authoritative one.
#[derive(Parser, Debug)]
#[command(name = "whois")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Connect to server HOST
    #[arg(short = 'h', long = "host", visible_alias = "server", value_name = "HOST")]
    pub host: Option<String>,

    /// Connect to PORT
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<String>,

    /// Hide legal disclaimers
    #[arg(short = 'H')]
    pub hide: bool,

    /// Identify as TAG to servers that support it
    #[arg(short = 'V', value_name = "TAG")]
    pub client_tag: Option<String>,

    /// Explain what is being done
    #[arg(long)]
    pub verbose: bool,

    /// Print diagnostic logs to stderr
    #[arg(long)]
    pub debug: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(flatten)]
    pub ripe: RipeFlags,

    /// Object to look up; several words are joined with spaces
    #[arg(
        value_name = "OBJECT",
        required_unless_present_any = ["template", "verbose_template", "server_info"]
    )]
    pub object: Vec<String>,
}

/// Flags understood by RIPE-like servers.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "RIPE-like server flags")]
pub struct RipeFlags {
    /// Search all databases
    #[arg(short = 'a')]
    pub all_sources: bool,

    /// Find the smallest address range with a reference to an irt object
    #[arg(short = 'c')]
    pub irt: bool,

    /// Return DNS reverse delegation objects too
    #[arg(short = 'd')]
    pub reverse_domains: bool,

    /// Fast raw output (implies -r)
    #[arg(short = 'F')]
    pub brief: bool,

    /// Only primary keys are returned
    #[arg(short = 'K')]
    pub primary_keys: bool,

    /// Find the one level less specific match
    #[arg(short = 'l')]
    pub one_less: bool,

    /// Find all less specific matches
    #[arg(short = 'L')]
    pub all_less: bool,

    /// Find first level more specific matches
    #[arg(short = 'm')]
    pub one_more: bool,

    /// Find all more specific matches
    #[arg(short = 'M')]
    pub all_more: bool,

    /// Turn off recursive lookups for contact information
    #[arg(short = 'r')]
    pub no_recursion: bool,

    /// Force to show local copy of the domain object even if it contains a referral
    #[arg(short = 'R')]
    pub local_copy: bool,

    /// Tell the server to leave out syntactic sugar
    #[arg(short = 'S')]
    pub no_sugar: bool,

    /// Exact match
    #[arg(short = 'x')]
    pub exact: bool,

    /// Find updates from SOURCE from serial FIRST to LAST
    #[arg(short = 'g', value_name = "SOURCE:FIRST-LAST")]
    pub updates: Option<String>,

    /// Do an inverse lookup for the specified attributes
    #[arg(short = 'i', value_name = "ATTR[,ATTR]...")]
    pub inverse: Option<String>,

    /// Search the database from SOURCE
    #[arg(short = 's', value_name = "SOURCE[,SOURCE]...")]
    pub sources: Option<String>,

    /// Only look for objects of TYPE
    #[arg(short = 'T', value_name = "TYPE[,TYPE]...")]
    pub types: Option<String>,

    /// Request template for object of TYPE ('all' for a list)
    #[arg(short = 't', value_name = "TYPE")]
    pub template: Option<String>,

    /// Request verbose template for object of TYPE
    #[arg(short = 'v', value_name = "TYPE")]
    pub verbose_template: Option<String>,

    /// Query specified server info
    #[arg(short = 'q', value_name = "version|sources")]
    pub server_info: Option<String>,
}

impl RipeFlags {
    /// Flag string sent ahead of the query, e.g. `-r -T person `.
    #[must_use]
    pub fn flag_string(&self) -> String {
        let switches = [
            ('a', self.all_sources),
            ('c', self.irt),
            ('d', self.reverse_domains),
            ('F', self.brief),
            ('K', self.primary_keys),
            ('l', self.one_less),
            ('L', self.all_less),
            ('m', self.one_more),
            ('M', self.all_more),
            ('r', self.no_recursion),
            ('R', self.local_copy),
            ('S', self.no_sugar),
            ('x', self.exact),
        ];
        let valued = [
            ('g', &self.updates),
            ('i', &self.inverse),
            ('s', &self.sources),
            ('T', &self.types),
            ('t', &self.template),
            ('v', &self.verbose_template),
            ('q', &self.server_info),
        ];

        let mut flags = String::new();
        for (flag, _) in switches.iter().filter(|(_, set)| *set) {
            flags.push('-');
            flags.push(*flag);
            flags.push(' ');
        }
        for (flag, value) in valued {
            if let Some(value) = value {
                flags.push('-');
                flags.push(flag);
                flags.push(' ');
                flags.push_str(value);
                flags.push(' ');
            }
        }
        flags
    }

    /// Returns true if the request stands on its own, without an object.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        self.template.is_some() || self.verbose_template.is_some() || self.server_info.is_some()
    }
}

impl Cli {
    /// The query string.
    ///
    /// Template and server-info requests carry no object.
    #[must_use]
    pub fn query(&self) -> String {
        if self.ripe.is_informational() {
            String::new()
        } else {
            self.object.join(" ")
        }
    }
}
