//! IRC numeric response codes as defined in RFC 2812.
//!
//! Response codes are three-digit numbers sent by servers to indicate the
//! result of commands or to provide information. The registry below is a
//! constant table: [`Response::from_code`] and [`Response::name`] are
//! generated from it, so a code and its symbolic name can never drift apart.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol, Section 5

#![allow(non_camel_case_types)]

mod helpers;

pub use helpers::{CodeRange, ParseResponseError};

macro_rules! numerics {
    ($( $(#[$doc:meta])* $name:ident = $code:literal, )*) => {
        /// IRC server response code.
        ///
        /// Response codes are categorized as:
        /// - 001-099: Connection/registration
        /// - 200-399: Command replies
        /// - 400-599: Error replies
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        #[non_exhaustive]
        pub enum Response {
            $( $(#[$doc])* $name = $code, )*
        }

        impl Response {
            /// Every registered response, in ascending code order.
            pub const ALL: &'static [Response] = &[$( Response::$name, )*];

            /// Creates a Response from a numeric code
            pub fn from_code(code: u16) -> Option<Response> {
                match code {
                    $( $code => Some(Response::$name), )*
                    _ => None,
                }
            }

            /// Symbolic name of the response, e.g. `"RPL_WELCOME"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Response::$name => stringify!($name), )*
                }
            }
        }
    };
}

numerics! {
    // === Connection Registration (001-099) ===
    /// 001 - Welcome to the network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server name, version and supported modes
    RPL_MYINFO = 4,
    /// 005 - Try another server
    RPL_BOUNCE = 5,

    // === Command Replies (200-399) ===
    /// 200 - Trace link
    RPL_TRACELINK = 200,
    /// 201 - Trace connecting
    RPL_TRACECONNECTING = 201,
    /// 202 - Trace handshake
    RPL_TRACEHANDSHAKE = 202,
    /// 203 - Trace unknown
    RPL_TRACEUNKNOWN = 203,
    /// 204 - Trace operator
    RPL_TRACEOPERATOR = 204,
    /// 205 - Trace user
    RPL_TRACEUSER = 205,
    /// 206 - Trace server
    RPL_TRACESERVER = 206,
    /// 207 - Trace service
    RPL_TRACESERVICE = 207,
    /// 208 - Trace new type
    RPL_TRACENEWTYPE = 208,
    /// 209 - Trace class
    RPL_TRACECLASS = 209,
    /// 210 - Trace reconnect
    RPL_TRACERECONNECT = 210,
    /// 211 - Stats link info
    RPL_STATSLINKINFO = 211,
    /// 212 - Stats commands
    RPL_STATSCOMMANDS = 212,
    /// 213 - Stats C-line
    RPL_STATSCLINE = 213,
    /// 214 - Stats N-line
    RPL_STATSNLINE = 214,
    /// 215 - Stats I-line
    RPL_STATSILINE = 215,
    /// 216 - Stats K-line
    RPL_STATSKLINE = 216,
    /// 217 - Stats Q-line
    RPL_STATSQLINE = 217,
    /// 218 - Stats Y-line
    RPL_STATSYLINE = 218,
    /// 219 - End of stats
    RPL_ENDOFSTATS = 219,
    /// 221 - User mode string
    RPL_UMODEIS = 221,
    /// 231 - Service info
    RPL_SERVICEINFO = 231,
    /// 232 - End of services
    RPL_ENDOFSERVICES = 232,
    /// 233 - Service
    RPL_SERVICE = 233,
    /// 234 - Service list entry
    RPL_SERVLIST = 234,
    /// 235 - End of service list
    RPL_SERVLISTEND = 235,
    /// 240 - Stats V-line
    RPL_STATSVLINE = 240,
    /// 241 - Stats L-line
    RPL_STATSLLINE = 241,
    /// 242 - Stats uptime
    RPL_STATSUPTIME = 242,
    /// 243 - Stats O-line
    RPL_STATSOLINE = 243,
    /// 244 - Stats H-line
    RPL_STATSHLINE = 244,
    /// 246 - Stats ping
    RPL_STATSPING = 246,
    /// 247 - Stats B-line
    RPL_STATSBLINE = 247,
    /// 250 - Stats D-line
    RPL_STATSDLINE = 250,
    /// 251 - Luser client count
    RPL_LUSERCLIENT = 251,
    /// 252 - Luser operator count
    RPL_LUSEROP = 252,
    /// 253 - Luser unknown connections
    RPL_LUSERUNKNOWN = 253,
    /// 254 - Luser channel count
    RPL_LUSERCHANNELS = 254,
    /// 255 - Luser local info
    RPL_LUSERME = 255,
    /// 256 - Admin info start
    RPL_ADMINME = 256,
    /// 257 - Admin location 1
    RPL_ADMINLOC1 = 257,
    /// 258 - Admin location 2
    RPL_ADMINLOC2 = 258,
    /// 259 - Admin email
    RPL_ADMINEMAIL = 259,
    /// 261 - Trace log
    RPL_TRACELOG = 261,
    /// 262 - End of trace
    RPL_TRACEEND = 262,
    /// 263 - Try again later
    RPL_TRYAGAIN = 263,

    // Misc replies
    /// 300 - Dummy placeholder
    RPL_NONE = 300,
    /// 301 - User is away
    RPL_AWAY = 301,
    /// 302 - USERHOST reply
    RPL_USERHOST = 302,
    /// 303 - ISON reply
    RPL_ISON = 303,
    /// 305 - No longer marked as away
    RPL_UNAWAY = 305,
    /// 306 - Marked as away
    RPL_NOWAWAY = 306,
    /// 311 - WHOIS user info
    RPL_WHOISUSER = 311,
    /// 312 - WHOIS server
    RPL_WHOISSERVER = 312,
    /// 313 - WHOIS operator status
    RPL_WHOISOPERATOR = 313,
    /// 314 - WHOWAS user info
    RPL_WHOWASUSER = 314,
    /// 315 - End of WHO
    RPL_ENDOFWHO = 315,
    /// 316 - WHOIS channel operator
    RPL_WHOISCHANOP = 316,
    /// 317 - WHOIS idle time
    RPL_WHOISIDLE = 317,
    /// 318 - End of WHOIS
    RPL_ENDOFWHOIS = 318,
    /// 319 - WHOIS channels
    RPL_WHOISCHANNELS = 319,
    /// 321 - List start
    RPL_LISTSTART = 321,
    /// 322 - List entry
    RPL_LIST = 322,
    /// 323 - End of list
    RPL_LISTEND = 323,
    /// 324 - Channel mode
    RPL_CHANNELMODEIS = 324,
    /// 325 - Channel creator
    RPL_UNIQOPIS = 325,
    /// 331 - No topic set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 341 - Invitation sent
    RPL_INVITING = 341,
    /// 342 - Summoning user
    RPL_SUMMONING = 342,
    /// 346 - Invite list entry
    RPL_INVITELIST = 346,
    /// 347 - End of invite list
    RPL_ENDOFINVITELIST = 347,
    /// 348 - Exception list entry
    RPL_EXCEPTLIST = 348,
    /// 349 - End of exception list
    RPL_ENDOFEXCEPTLIST = 349,
    /// 351 - Server version
    RPL_VERSION = 351,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 361 - Kill done
    RPL_KILLDONE = 361,
    /// 362 - Closing link
    RPL_CLOSING = 362,
    /// 363 - End of closing
    RPL_CLOSEEND = 363,
    /// 364 - Links entry
    RPL_LINKS = 364,
    /// 365 - End of links
    RPL_ENDOFLINKS = 365,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES = 366,
    /// 367 - Ban list entry
    RPL_BANLIST = 367,
    /// 368 - End of ban list
    RPL_ENDOFBANLIST = 368,
    /// 369 - End of WHOWAS
    RPL_ENDOFWHOWAS = 369,
    /// 371 - Info line
    RPL_INFO = 371,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 373 - Info start
    RPL_INFOSTART = 373,
    /// 374 - End of info
    RPL_ENDOFINFO = 374,
    /// 375 - MOTD start
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 381 - You are now an operator
    RPL_YOUREOPER = 381,
    /// 382 - Rehashing config
    RPL_REHASHING = 382,
    /// 383 - You are a service
    RPL_YOURESERVICE = 383,
    /// 384 - Port number
    RPL_MYPORTIS = 384,
    /// 391 - Server local time
    RPL_TIME = 391,
    /// 392 - Users start
    RPL_USERSSTART = 392,
    /// 393 - Users entry
    RPL_USERS = 393,
    /// 394 - End of users
    RPL_ENDOFUSERS = 394,
    /// 395 - Nobody logged in
    RPL_NOUSERS = 395,

    // === Error Replies (400-599) ===
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 402 - No such server
    ERR_NOSUCHSERVER = 402,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 405 - Too many channels joined
    ERR_TOOMANYCHANNELS = 405,
    /// 406 - There was no such nickname
    ERR_WASNOSUCHNICK = 406,
    /// 407 - Too many targets
    ERR_TOOMANYTARGETS = 407,
    /// 408 - No such service
    ERR_NOSUCHSERVICE = 408,
    /// 409 - No origin specified
    ERR_NOORIGIN = 409,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 413 - No toplevel domain specified
    ERR_NOTOPLEVEL = 413,
    /// 414 - Wildcard in toplevel domain
    ERR_WILDTOPLEVEL = 414,
    /// 415 - Bad server/host mask
    ERR_BADMASK = 415,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - MOTD file is missing
    ERR_NOMOTD = 422,
    /// 423 - No administrative info available
    ERR_NOADMININFO = 423,
    /// 424 - File error doing operation
    ERR_FILEERROR = 424,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname is already in use
    ERR_NICKNAMEINUSE = 433,
    /// 436 - Nickname collision
    ERR_NICKCOLLISION = 436,
    /// 437 - Nick/channel is temporarily unavailable
    ERR_UNAVAILRESOURCE = 437,
    /// 441 - They aren't on that channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - You're not on that channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - User is already on channel
    ERR_USERONCHANNEL = 443,
    /// 444 - User not logged in
    ERR_NOLOGIN = 444,
    /// 445 - SUMMON has been disabled
    ERR_SUMMONDISABLED = 445,
    /// 446 - USERS has been disabled
    ERR_USERSDISABLED = 446,
    /// 451 - You have not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Unauthorized command (already registered)
    ERR_ALREADYREGISTRED = 462,
    /// 463 - Host not privileged to connect
    ERR_NOPERMFORHOST = 463,
    /// 464 - Password incorrect
    ERR_PASSWDMISMATCH = 464,
    /// 465 - You are banned from this server
    ERR_YOUREBANNEDCREEP = 465,
    /// 466 - You will be banned
    ERR_YOUWILLBEBANNED = 466,
    /// 467 - Channel key already set
    ERR_KEYSET = 467,
    /// 471 - Cannot join channel (+l)
    ERR_CHANNELISFULL = 471,
    /// 472 - Unknown mode char
    ERR_UNKNOWNMODE = 472,
    /// 473 - Cannot join channel (+i)
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Cannot join channel (+b)
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Cannot join channel (+k)
    ERR_BADCHANNELKEY = 475,
    /// 476 - Bad channel mask
    ERR_BADCHANMASK = 476,
    /// 477 - Channel doesn't support modes
    ERR_NOCHANMODES = 477,
    /// 478 - Channel list is full
    ERR_BANLISTFULL = 478,
    /// 481 - Permission denied (not an operator)
    ERR_NOPRIVILEGES = 481,
    /// 482 - You're not channel operator
    ERR_CHANOPRIVSNEEDED = 482,
    /// 483 - You can't kill a server
    ERR_CANTKILLSERVER = 483,
    /// 484 - Your connection is restricted
    ERR_RESTRICTED = 484,
    /// 485 - You're not the original channel operator
    ERR_UNIQOPPRIVSNEEDED = 485,
    /// 491 - No O-lines for your host
    ERR_NOOPERHOST = 491,
    /// 492 - No service host
    ERR_NOSERVICEHOST = 492,

    // User mode errors
    /// 501 - Unknown MODE flag
    ERR_UMODEUNKNOWNFLAG = 501,
    /// 502 - Cannot change mode for other users
    ERR_USERSDONTMATCH = 502,
}
