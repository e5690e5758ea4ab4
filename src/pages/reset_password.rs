//! Reset Password Page
//!
//! Two-step OTP flow. Step one mails a code to the entered address,
//! step two submits the code with the replacement password and returns
//! to login. The steps are independent round trips; a failure in step
//! two does not undo step one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_toast::{toast_error, toast_success, use_toasts};

use crate::api::{self, ResetPasswordArgs};
use crate::pages::Page;

#[derive(Clone, Copy, PartialEq)]
enum ResetStep {
    RequestOtp,
    SubmitNew,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (step, set_step) = signal(ResetStep::RequestOtp);
    let (email, set_email) = signal(String::new());
    let (otp, set_otp) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let send_otp = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let email_value = email.get();
        spawn_local(async move {
            let result = api::send_reset_otp(&email_value).await;
            set_busy.set(false);
            match result {
                Ok(_) => {
                    toast_success(toasts, "OTP sent to your email ✅");
                    set_step.set(ResetStep::SubmitNew);
                }
                Err(err) => {
                    toast_error(toasts, err.server_message().unwrap_or("Error sending OTP"));
                }
            }
        });
    };

    let reset = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            set_busy.set(true);
            let email_value = email.get();
            let otp_value = otp.get();
            let password_value = new_password.get();
            let navigate = navigate.clone();
            spawn_local(async move {
                let args = ResetPasswordArgs {
                    email: &email_value,
                    otp: &otp_value,
                    new_password: &password_value,
                };
                let result = api::reset_password(&args).await;
                set_busy.set(false);
                match result {
                    Ok(_) => {
                        toast_success(toasts, "Password reset successfully ✅");
                        navigate(Page::Login.path(), Default::default());
                    }
                    Err(err) => {
                        toast_error(
                            toasts,
                            err.server_message().unwrap_or("Error resetting password"),
                        );
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                {move || match step.get() {
                    ResetStep::RequestOtp => {
                        view! {
                            <div class="auth-step">
                                <h2 class="auth-title">"Reset Password"</h2>
                                <form on:submit=send_otp novalidate=true>
                                    <input
                                        class="auth-input"
                                        type="email"
                                        placeholder="Enter your email"
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:disabled=busy
                                    />
                                    <button
                                        type="submit"
                                        class="btn-primary auth-submit"
                                        prop:disabled=busy
                                    >
                                        "Send OTP"
                                    </button>
                                </form>
                            </div>
                        }
                            .into_any()
                    }
                    ResetStep::SubmitNew => {
                        view! {
                            <div class="auth-step">
                                <h2 class="auth-title">"Enter OTP & New Password"</h2>
                                <form on:submit=reset.clone() novalidate=true>
                                    <input
                                        class="auth-input"
                                        type="text"
                                        placeholder="Enter OTP"
                                        prop:value=otp
                                        on:input=move |ev| set_otp.set(event_target_value(&ev))
                                        prop:disabled=busy
                                    />
                                    <input
                                        class="auth-input"
                                        type="password"
                                        placeholder="Enter new password"
                                        prop:value=new_password
                                        on:input=move |ev| {
                                            set_new_password.set(event_target_value(&ev))
                                        }
                                        prop:disabled=busy
                                    />
                                    <button
                                        type="submit"
                                        class="btn-primary auth-submit"
                                        prop:disabled=busy
                                    >
                                        "Reset Password"
                                    </button>
                                </form>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
