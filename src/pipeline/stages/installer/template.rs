//! Installer script template.
//!
//! Every substitution sits inside a double-quoted shell string and is
//! escaped by [`super::utils::escape_double_quoted`]. Handlebars syntax is
//! only used for substitution points and the profile list; the install
//! logic itself is plain bash evaluated on the end user's machine.

pub const INSTALLER_TEMPLATE: &str = r#"#!/usr/bin/env bash
# {{name}} installer for {{platform}}
# Installs {{name}} {{version}} system-wide (root) or for the current user.

set -e

NAME="{{name}}"
VERSION="{{version}}"
BINARY="{{binary_name}}"

# Escape sequences are decoded once, here. Messages are printed with %s so
# substituted values are never interpreted by printf.
RED=$'\033[0;31m'
GREEN=$'\033[0;32m'
BLUE=$'\033[0;34m'
YELLOW=$'\033[1;33m'
NC=$'\033[0m'

say() {
    printf '%s\n' "$*"
}

say "🚀 ${NAME} Installer v${VERSION}"
say "=================================="
{{#if description}}
say "{{description}}"
{{/if}}

# Install policy: decided here, at install time, from the effective user.
if [ "$(id -u)" -eq 0 ]; then
    INSTALL_DIR="{{system_install_dir}}"
    CONFIG_DIR="{{system_config_dir}}"
    say "${BLUE}Installing system-wide${NC}"
else
    if [ -z "${HOME:-}" ]; then
        say "${RED}❌ HOME is not set; cannot install for the current user${NC}"
        exit 1
    fi
    INSTALL_DIR="$HOME/{{user_install_dir}}"
    CONFIG_DIR="$HOME/{{user_config_dir}}"
    say "${BLUE}Installing for current user${NC}"
fi

say "📍 Installation directory: $INSTALL_DIR"

if [ ! -f "./$BINARY" ]; then
    say "${RED}❌ ${BINARY} executable not found in current directory${NC}"
    exit 1
fi

mkdir -p "$INSTALL_DIR"
mkdir -p "$CONFIG_DIR"

say "📦 Installing ${NAME} executable..."
cp "./$BINARY" "$INSTALL_DIR/$BINARY"
chmod 755 "$INSTALL_DIR/$BINARY"
say "${GREEN}✅ ${NAME} executable installed${NC}"

say "📚 Installing examples..."
if [ -d "./examples" ]; then
    mkdir -p "$CONFIG_DIR/examples"
    cp -R ./examples/. "$CONFIG_DIR/examples/"
    say "${GREEN}✅ Examples installed${NC}"
else
    say "${YELLOW}⚠️  No examples directory found${NC}"
fi

# PATH registration. A profile that already registers INSTALL_DIR means a
# previous install registered it; otherwise append to the first writable
# profile that exists and stop.
PROFILES=({{#each profiles}}"$HOME/{{this}}" {{/each}})
PATH_STATUS="Manual required"
PATH_PROFILE=""

# True if a line of $1 has INSTALL_DIR as a whole PATH element: preceded by
# `:`, `=` or a quote and followed by `:`, a quote or end of line.
registers_install_dir() {
    local line
    while IFS= read -r line || [ -n "$line" ]; do
        case "$line" in
            *[:=\"\']"$INSTALL_DIR"[:\"\']*|*[:=\"\']"$INSTALL_DIR")
                return 0
                ;;
        esac
    done < "$1"
    return 1
}

for profile in "${PROFILES[@]}"; do
    if [ -f "$profile" ] && registers_install_dir "$profile"; then
        PATH_STATUS="Already configured"
        PATH_PROFILE="$profile"
        break
    fi
done

if [ -z "$PATH_PROFILE" ]; then
    for profile in "${PROFILES[@]}"; do
        if [ -f "$profile" ] && [ -w "$profile" ]; then
            say "🔧 Adding to PATH in $profile..."
            if { printf '\n# %s\n' "$NAME"; printf 'export PATH="$PATH:%s"\n' "$INSTALL_DIR"; } >> "$profile"; then
                PATH_STATUS="Yes"
                PATH_PROFILE="$profile"
                break
            fi
        fi
    done
fi

say "🧪 Testing installation..."
if "$INSTALL_DIR/$BINARY" --version > /dev/null 2>&1; then
    say "${GREEN}✅ ${NAME} installed successfully!${NC}"
else
    say "${RED}❌ Installation test failed${NC}"
    exit 1
fi

say ""
say "🎉 Installation Complete!"
say "========================="
say ""
say "📋 What was installed:"
say "   • ${NAME} executable: $INSTALL_DIR/$BINARY"
say "   • Examples: $CONFIG_DIR/examples/"
say "   • Added to PATH: $PATH_STATUS"
{{#if homepage}}
say "   • Documentation: {{homepage}}"
{{/if}}

case ":$PATH:" in
    *":$INSTALL_DIR:"*)
        ;;
    *)
        if [ -n "$PATH_PROFILE" ]; then
            RELOAD="$PATH_PROFILE"
        else
            RELOAD="$HOME/{{first_profile}}"
        fi
        say ""
        say "${YELLOW}⚠️  Note: $INSTALL_DIR is not on your PATH yet. Restart your terminal or run:${NC}"
        say "   source $RELOAD"
        ;;
esac
"#;
