//! Outbound command builders.
//!
//! [`CommandExt`] turns each RFC 2812 client verb into exactly one outbound
//! line and hands it to [`CommandExt::send_line`]. Implementors only supply
//! the transport; every builder is a provided method.
//!
//! Builders check only what is needed to produce a well-formed line: list
//! lengths, mode restrictions and target counts. Line length and control
//! characters are left to the implementor's `send_line`.

mod util;

pub use self::util::CommandLine;

use self::util::{comma_join, require_items};
use crate::error::ProtocolError;
use crate::mode::{ChannelMode, ModeOperation, StatsQuery, UserMode};

/// Maximum number of nicknames in one USERHOST query.
pub const USERHOST_MAX_NICKS: usize = 5;

/// One method per client command, funnelled through [`send_line`].
///
/// Optional arguments that are `None` or empty are omitted from the line.
/// Where a later optional argument only makes sense after an earlier one
/// (e.g. the target of `LUSERS` after its mask), it is dropped when the
/// earlier one is absent.
///
/// [`send_line`]: CommandExt::send_line
pub trait CommandExt {
    /// Error returned by the transport. Builder precondition failures are
    /// converted into it.
    type Error: From<ProtocolError>;

    /// Send one line, without its delimiter.
    fn send_line(&self, line: &str) -> Result<(), Self::Error>;

    /// Send a line produced by a [`CommandLine`].
    fn send_command(&self, command: CommandLine) -> Result<(), Self::Error> {
        self.send_line(command.as_str())
    }

    // === Connection registration ===

    /// `PASS <password>`
    fn pass(&self, password: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("PASS").arg(password))
    }

    /// `NICK <nickname>`
    fn nick(&self, nickname: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("NICK").arg(nickname))
    }

    /// `USER <username> <mode> * :<realname>`
    ///
    /// `modes` may only hold [`UserMode::Invisible`] and [`UserMode::Wallops`];
    /// they are encoded as the RFC 2812 registration bitmask.
    fn user(&self, username: &str, realname: &str, modes: &[UserMode]) -> Result<(), Self::Error> {
        let mut bitmask = 0u8;
        for mode in modes {
            bitmask |= mode.registration_bit().ok_or(ProtocolError::InvalidMode {
                command: "USER",
                reason: "only user modes 'i' and 'w' may be set at registration",
            })?;
        }
        self.send_command(
            CommandLine::new("USER")
                .arg(username)
                .arg(bitmask)
                .arg('*')
                .trailing(realname),
        )
    }

    /// `OPER <name> <password>`
    fn oper(&self, name: &str, password: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("OPER").arg(name).arg(password))
    }

    /// `MODE <nickname> [(+|-)<mode>]`
    ///
    /// Without a change this queries the current modes. `a` belongs to AWAY,
    /// `+o`/`+O` to OPER, and `-r` cannot be requested by a client.
    fn user_mode(
        &self,
        nickname: &str,
        change: Option<(ModeOperation, UserMode)>,
    ) -> Result<(), Self::Error> {
        let mut line = CommandLine::new("MODE").arg(nickname);
        if let Some((op, mode)) = change {
            let reason = match (op, mode) {
                (_, UserMode::Away) => Some("user mode 'a' can only be set through AWAY"),
                (ModeOperation::Add, UserMode::Oper | UserMode::LocalOper) => {
                    Some("user modes '+o' and '+O' can only be set through OPER")
                }
                (ModeOperation::Remove, UserMode::Restricted) => {
                    Some("user mode '-r' cannot be set")
                }
                _ => None,
            };
            if let Some(reason) = reason {
                return Err(ProtocolError::InvalidMode {
                    command: "MODE",
                    reason,
                }
                .into());
            }
            line = line.arg(format_args!("{}{}", op, mode));
        }
        self.send_command(line)
    }

    /// `QUIT [:<message>]`
    fn quit(&self, message: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("QUIT").opt_trailing(message))
    }

    /// `SQUIT <server> :<comment>`
    fn squit(&self, server: &str, comment: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("SQUIT").arg(server).trailing(comment))
    }

    /// `PONG :<payload>`
    fn pong(&self, payload: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("PONG").trailing(payload))
    }

    // === Channel operations ===

    /// `JOIN <channel> [<key>]`
    fn join(&self, channel: &str, key: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("JOIN").arg(channel).opt_arg(key))
    }

    /// `JOIN <channel>{,<channel>} [<key>{,<key>}]`
    ///
    /// Keys pair with channels by position, so keyed channels are moved to
    /// the front, keeping their relative order.
    fn join_many(&self, channels: &[(&str, Option<&str>)]) -> Result<(), Self::Error> {
        let mut keyed = Vec::new();
        let mut keys = Vec::new();
        let mut unkeyed = Vec::new();
        for (channel, key) in channels.iter().filter(|(c, _)| !c.is_empty()) {
            match key.filter(|k| !k.is_empty()) {
                Some(key) => {
                    keyed.push(*channel);
                    keys.push(key);
                }
                None => unkeyed.push(*channel),
            }
        }
        if keyed.is_empty() && unkeyed.is_empty() {
            return Err(ProtocolError::EmptyList {
                command: "JOIN",
                what: "channel",
            }
            .into());
        }

        keyed.extend(unkeyed);
        self.send_command(
            CommandLine::new("JOIN")
                .list(&keyed)
                .opt_arg(Some(comma_join(keys).as_str())),
        )
    }

    /// `PART <channel> [:<message>]`
    fn part(&self, channel: &str, message: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("PART").arg(channel).opt_trailing(message))
    }

    /// `PART <channel>{,<channel>} [:<message>]`
    fn part_many(&self, channels: &[&str], message: Option<&str>) -> Result<(), Self::Error> {
        require_items("PART", "channel", channels)?;
        self.send_command(CommandLine::new("PART").list(channels).opt_trailing(message))
    }

    /// `JOIN 0`, leaving every channel.
    fn part_all(&self) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("JOIN").arg('0'))
    }

    /// `MODE <channel> [(+|-)<mode>] [<args>]`
    fn channel_mode(
        &self,
        channel: &str,
        change: Option<(ModeOperation, ChannelMode)>,
        args: Option<&str>,
    ) -> Result<(), Self::Error> {
        let mut line = CommandLine::new("MODE").arg(channel);
        if let Some((op, mode)) = change {
            line = line.arg(format_args!("{}{}", op, mode));
        }
        self.send_command(line.opt_arg(args))
    }

    /// `TOPIC <channel> [:<topic>]`
    ///
    /// `None` queries the topic. `Some("")` clears it.
    fn topic(&self, channel: &str, topic: Option<&str>) -> Result<(), Self::Error> {
        let line = CommandLine::new("TOPIC").arg(channel);
        match topic {
            Some(topic) => self.send_command(line.trailing(topic)),
            None => self.send_command(line),
        }
    }

    /// `NAMES [<channel>{,<channel>} [<target>]]`
    fn names(&self, channels: &[&str], target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(channel_query("NAMES", channels, target))
    }

    /// `LIST [<channel>{,<channel>} [<target>]]`
    fn list(&self, channels: &[&str], target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(channel_query("LIST", channels, target))
    }

    /// `INVITE <nickname> <channel>`
    fn invite(&self, nickname: &str, channel: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("INVITE").arg(nickname).arg(channel))
    }

    /// `KICK <channel> <user> [:<comment>]`
    fn kick(&self, channel: &str, user: &str, comment: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(
            CommandLine::new("KICK")
                .arg(channel)
                .arg(user)
                .opt_trailing(comment),
        )
    }

    /// `KICK <channel> <user>{,<user>} [:<comment>]`
    fn kick_many(
        &self,
        channel: &str,
        users: &[&str],
        comment: Option<&str>,
    ) -> Result<(), Self::Error> {
        require_items("KICK", "user", users)?;
        self.send_command(
            CommandLine::new("KICK")
                .arg(channel)
                .list(users)
                .opt_trailing(comment),
        )
    }

    /// `KICK <channel>{,<channel>} <user>{,<user>} [:<comment>]`
    ///
    /// Channels and users pair by position, so both lists must have the
    /// same length once empty elements are dropped. A single channel applies
    /// to every user.
    fn kick_pairs(
        &self,
        channels: &[&str],
        users: &[&str],
        comment: Option<&str>,
    ) -> Result<(), Self::Error> {
        let channels: Vec<&str> = channels.iter().copied().filter(|c| !c.is_empty()).collect();
        let users: Vec<&str> = users.iter().copied().filter(|u| !u.is_empty()).collect();
        if let [channel] = channels[..] {
            return self.kick_many(channel, &users, comment);
        }
        if channels.len() != users.len() {
            return Err(ProtocolError::MismatchedLists {
                command: "KICK",
                left: "channel",
                right: "user",
                left_len: channels.len(),
                right_len: users.len(),
            }
            .into());
        }
        require_items("KICK", "channel", &channels)?;
        self.send_command(
            CommandLine::new("KICK")
                .list(&channels)
                .list(&users)
                .opt_trailing(comment),
        )
    }

    // === Messaging ===

    /// `PRIVMSG <target> :<text>`
    fn privmsg(&self, target: &str, text: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("PRIVMSG").arg(target).trailing(text))
    }

    /// `NOTICE <target> :<text>`
    fn notice(&self, target: &str, text: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("NOTICE").arg(target).trailing(text))
    }

    // === Server queries ===

    /// `MOTD [<target>]`
    fn motd(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("MOTD").opt_arg(target))
    }

    /// `LUSERS [<mask> [<target>]]`
    fn lusers(&self, mask: Option<&str>, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(nested("LUSERS", mask, target))
    }

    /// `VERSION [<target>]`
    fn version(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("VERSION").opt_arg(target))
    }

    /// `STATS [<query> [<target>]]`
    fn stats(&self, query: Option<StatsQuery>, target: Option<&str>) -> Result<(), Self::Error> {
        let line = match query {
            Some(query) => CommandLine::new("STATS").arg(query).opt_arg(target),
            None => CommandLine::new("STATS"),
        };
        self.send_command(line)
    }

    /// `LINKS [[<remote server>] <server mask>]`
    fn links(&self, remote_server: Option<&str>, server_mask: Option<&str>) -> Result<(), Self::Error> {
        let line = match server_mask.filter(|m| !m.is_empty()) {
            Some(mask) => CommandLine::new("LINKS").opt_arg(remote_server).arg(mask),
            None => CommandLine::new("LINKS"),
        };
        self.send_command(line)
    }

    /// `TIME [<target>]`
    fn time(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("TIME").opt_arg(target))
    }

    /// `CONNECT <target server> <port> [<remote server>]`
    fn connect(
        &self,
        target_server: &str,
        port: u16,
        remote_server: Option<&str>,
    ) -> Result<(), Self::Error> {
        self.send_command(
            CommandLine::new("CONNECT")
                .arg(target_server)
                .arg(port)
                .opt_arg(remote_server),
        )
    }

    /// `TRACE [<target>]`
    fn trace(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("TRACE").opt_arg(target))
    }

    /// `ADMIN [<target>]`
    fn admin(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("ADMIN").opt_arg(target))
    }

    /// `INFO [<target>]`
    fn info(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("INFO").opt_arg(target))
    }

    // === Service queries ===

    /// `SERVLIST [<mask> [<type>]]`
    fn servlist(&self, mask: Option<&str>, service_type: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(nested("SERVLIST", mask, service_type))
    }

    /// `SQUERY <service> :<text>`
    fn squery(&self, service: &str, text: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("SQUERY").arg(service).trailing(text))
    }

    // === User queries ===

    /// `WHO [<mask> [o]]`
    fn who(&self, mask: Option<&str>, only_opers: bool) -> Result<(), Self::Error> {
        let line = match mask.filter(|m| !m.is_empty()) {
            Some(mask) if only_opers => CommandLine::new("WHO").arg(mask).arg('o'),
            Some(mask) => CommandLine::new("WHO").arg(mask),
            None => CommandLine::new("WHO"),
        };
        self.send_command(line)
    }

    /// `WHOIS [<target>] <mask>{,<mask>}`
    fn whois(&self, masks: &[&str], target: Option<&str>) -> Result<(), Self::Error> {
        require_items("WHOIS", "mask", masks)?;
        self.send_command(CommandLine::new("WHOIS").opt_arg(target).list(masks))
    }

    /// `WHOWAS <nickname>{,<nickname>} [<count> [<target>]]`
    fn whowas(
        &self,
        nicknames: &[&str],
        count: Option<u32>,
        target: Option<&str>,
    ) -> Result<(), Self::Error> {
        require_items("WHOWAS", "nickname", nicknames)?;
        let line = CommandLine::new("WHOWAS").list(nicknames);
        let line = match count {
            Some(count) => line.arg(count).opt_arg(target),
            None => line,
        };
        self.send_command(line)
    }

    // === Miscellaneous ===

    /// `KILL <nickname> :<comment>`
    fn kill(&self, nickname: &str, comment: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("KILL").arg(nickname).trailing(comment))
    }

    /// `AWAY [:<text>]`. Without text, the away status is removed.
    fn away(&self, text: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("AWAY").opt_trailing(text))
    }

    /// `REHASH`
    fn rehash(&self) -> Result<(), Self::Error> {
        self.send_line("REHASH")
    }

    /// `DIE`
    fn die(&self) -> Result<(), Self::Error> {
        self.send_line("DIE")
    }

    /// `RESTART`
    fn restart(&self) -> Result<(), Self::Error> {
        self.send_line("RESTART")
    }

    /// `SUMMON <user> [<target> [<channel>]]`
    fn summon(
        &self,
        user: &str,
        target: Option<&str>,
        channel: Option<&str>,
    ) -> Result<(), Self::Error> {
        let line = CommandLine::new("SUMMON").arg(user);
        let line = match target.filter(|t| !t.is_empty()) {
            Some(target) => line.arg(target).opt_arg(channel),
            None => line,
        };
        self.send_command(line)
    }

    /// `USERS [<target>]`
    fn users(&self, target: Option<&str>) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("USERS").opt_arg(target))
    }

    /// `WALLOPS :<text>`
    fn wallops(&self, text: &str) -> Result<(), Self::Error> {
        self.send_command(CommandLine::new("WALLOPS").trailing(text))
    }

    /// `USERHOST <nickname>{ <nickname>}`, at most five nicknames.
    fn userhost(&self, nicknames: &[&str]) -> Result<(), Self::Error> {
        require_items("USERHOST", "nickname", nicknames)?;
        let count = nicknames.iter().filter(|n| !n.is_empty()).count();
        if count > USERHOST_MAX_NICKS {
            return Err(ProtocolError::TooManyTargets {
                command: "USERHOST",
                actual: count,
                limit: USERHOST_MAX_NICKS,
            }
            .into());
        }
        self.send_command(CommandLine::new("USERHOST").spaced(nicknames))
    }

    /// `ISON <nickname>{ <nickname>}`
    fn ison(&self, nicknames: &[&str]) -> Result<(), Self::Error> {
        require_items("ISON", "nickname", nicknames)?;
        self.send_command(CommandLine::new("ISON").spaced(nicknames))
    }
}

/// `<keyword> [<first> [<second>]]`
fn nested(keyword: &str, first: Option<&str>, second: Option<&str>) -> CommandLine {
    match first.filter(|f| !f.is_empty()) {
        Some(first) => CommandLine::new(keyword).arg(first).opt_arg(second),
        None => CommandLine::new(keyword),
    }
}

/// `<keyword> [<channel>{,<channel>} [<target>]]`
fn channel_query(keyword: &str, channels: &[&str], target: Option<&str>) -> CommandLine {
    let joined = comma_join(channels.iter().copied());
    nested(keyword, Some(joined.as_str()), target)
}
