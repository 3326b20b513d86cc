//! Auth folder: signup and login flows.
//!
//! Every login variant captures the issued token and user id so the
//! authenticated folders further down the collection can run unattended.

use flowgen_domain::{CaptureRule, HttpMethod, Item, Request};
use serde_json::json;

use super::headers::{bearer_json, json_content};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "Signup Combined (Email + Mobile)",
            Request::new(HttpMethod::Post, "api/auth/signup/combined-init")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "name": "{{userName}}",
                    "email": "{{userEmail}}",
                    "mobile": "{{mobileNumber}}",
                    "countryCode": "{{countryCode}}",
                    "password": "{{userPassword}}"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.userId", "userId")]),
        Item::new(
            "Signup Email - Init",
            Request::new(HttpMethod::Post, "api/auth/signup/email-init")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "name": "{{userName}}",
                    "email": "{{userEmail}}",
                    "password": "{{userPassword}}"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.userId", "userId")]),
        Item::new(
            "Signup Mobile - Init",
            Request::new(HttpMethod::Post, "api/auth/signup/mobile-init")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "name": "{{userName}}",
                    "mobile": "{{mobileNumber}}",
                    "countryCode": "{{countryCode}}"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.userId", "userId")]),
        Item::new(
            "Signup - Verify OTP",
            Request::new(HttpMethod::Post, "api/auth/signup/verify")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "userId": "{{userId}}",
                    "otp": "{{otpCode}}",
                    "type": "email"
                })),
        )
        .with_captures(&[
            CaptureRule::new("data && data.token", "userToken"),
            CaptureRule::new("data && data._id", "userId"),
        ]),
        Item::new(
            "Setup PIN",
            Request::new(HttpMethod::Post, "api/auth/pin/setup")
                .with_headers(bearer_json("userToken"))
                .with_json_body(&json!({ "pin": "{{userPin}}" })),
        ),
        Item::new(
            "Login - Email & Password",
            Request::new(HttpMethod::Post, "api/auth/login/email")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "email": "{{userEmail}}",
                    "password": "{{userPassword}}"
                })),
        )
        .with_captures(&[
            CaptureRule::new("data && data.token", "userToken"),
            CaptureRule::new("data && data._id", "userId"),
        ]),
        Item::new(
            "Login - Mobile Init (OTP)",
            Request::new(HttpMethod::Post, "api/auth/login/mobile-init")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "mobile": "{{mobileNumber}}",
                    "countryCode": "{{countryCode}}"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.userId", "userId")]),
        Item::new(
            "Login - Mobile Verify (OTP)",
            Request::new(HttpMethod::Post, "api/auth/login/mobile-verify")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "mobile": "{{mobileNumber}}",
                    "countryCode": "{{countryCode}}",
                    "otp": "{{mobileOtp}}"
                })),
        )
        .with_captures(&[
            CaptureRule::new("data && data.token", "userToken"),
            CaptureRule::new("data && data._id", "userId"),
        ]),
        Item::new(
            "Login - OTP Init (Email or Mobile)",
            Request::new(HttpMethod::Post, "api/auth/login/otp-init")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "identifier": "{{userEmail}}",
                    "countryCode": "{{countryCode}}"
                })),
        )
        .with_captures(&[CaptureRule::new("data && data.userId", "userId")]),
        Item::new(
            "Login - OTP Verify (Email or Mobile)",
            Request::new(HttpMethod::Post, "api/auth/login/otp-verify")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "identifier": "{{userEmail}}",
                    "countryCode": "{{countryCode}}",
                    "otp": "{{otpCode}}"
                })),
        )
        .with_captures(&[
            CaptureRule::new("data && data.token", "userToken"),
            CaptureRule::new("data && data._id", "userId"),
        ]),
        Item::new(
            "Login - PIN",
            Request::new(HttpMethod::Post, "api/auth/login/pin")
                .with_headers(json_content())
                .with_json_body(&json!({
                    "identifier": "{{userEmail}}",
                    "countryCode": "{{countryCode}}",
                    "pin": "{{userPin}}"
                })),
        )
        .with_captures(&[
            CaptureRule::new("data && data.token", "userToken"),
            CaptureRule::new("data && data._id", "userId"),
        ]),
    ]
}
